//! Delay helpers built on the tokio timer driver.

use std::time::Duration;

use tokio::time::Sleep;

/// Schedules a delay of `duration` and returns the future that completes
/// once it has elapsed.
///
/// The deadline is fixed at the moment of this call and the call itself
/// never blocks; the caller suspends only at its explicit `.await`. There
/// is no cancellation handle - dropping the returned future abandons the
/// delay with no observable effect. A zero duration is valid and completes
/// at the next scheduling opportunity.
///
/// Delays of different durations scheduled concurrently carry no mutual
/// ordering guarantee beyond each completing no earlier than its own
/// duration.
///
/// # Examples
///
/// ```
/// use satchel_utils::timing::sleep;
/// use std::time::Duration;
///
/// # async fn demo() {
/// sleep(Duration::from_millis(200)).await;
/// # }
/// ```
pub fn sleep(duration: Duration) -> Sleep {
    tracing::trace!("Scheduling delay of {:?}", duration);
    tokio::time::sleep(duration)
}

/// Schedules a delay of `millis` milliseconds.
///
/// Convenience form of [`sleep`] for callers holding a raw millisecond
/// count. Negative durations are unrepresentable here: the parameter is
/// unsigned.
///
/// # Examples
///
/// ```
/// use satchel_utils::timing::sleep_ms;
///
/// # async fn demo() {
/// sleep_ms(200).await;
/// # }
/// ```
pub fn sleep_ms(millis: u64) -> Sleep {
    sleep(Duration::from_millis(millis))
}
