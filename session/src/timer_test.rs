use super::*;

struct TokioTimer;

impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[tokio::test(start_paused = true)]
async fn with_timeout_returns_value_when_future_wins() {
    let out = with_timeout(&TokioTimer, Duration::from_secs(10), async {
        tokio::time::sleep(Duration::from_secs(1)).await;
        7
    })
    .await;
    assert_eq!(out, Some(7));
}

#[tokio::test(start_paused = true)]
async fn with_timeout_returns_none_when_deadline_wins() {
    let out = with_timeout(&TokioTimer, Duration::from_secs(10), async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        7
    })
    .await;
    assert_eq!(out, None);
}
