//! Indicator animator - renders strength transitions on a tokio timer.

use tokio::sync::mpsc;
use tokio::time::{Duration, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::indicator::{IndicatorFrame, IndicatorTransition};
use crate::observer::StrengthEvent;
use crate::style::IndicatorStyle;

/// Drives indicator transitions until `token` is cancelled or `events` closes.
///
/// Each event starts a transition from the frame currently on screen, so a
/// new event supersedes one still in flight. `render` receives every frame;
/// the last frame of a transition is always the resting frame. Once the
/// channel closes, the in-flight transition is played to the end.
pub async fn run_indicator_animator<F>(
    mut events: mpsc::UnboundedReceiver<StrengthEvent>,
    style: IndicatorStyle,
    token: CancellationToken,
    mut render: F,
) where
    F: FnMut(&IndicatorFrame),
{
    let mut displayed = IndicatorFrame::resting(None, &style);
    let mut active: Option<(IndicatorTransition, Instant)> = None;
    let mut closed = false;

    let mut ticker = tokio::time::interval(Duration::from_millis(style.frame_interval_ms.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    #[cfg(feature = "tracing")]
    tracing::info!("indicator animator started");

    loop {
        if closed && active.is_none() {
            break;
        }

        tokio::select! {
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::info!("indicator animator cancelled");
                break;
            }
            event = events.recv(), if !closed => match event {
                Some(event) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("animating towards {:?}", event.strength);

                    let transition = IndicatorTransition::new(&displayed, event.strength, &style);
                    displayed = transition.sample(0.0);
                    render(&displayed);
                    active = Some((transition, Instant::now()));
                    ticker.reset();
                }
                None => closed = true,
            },
            _ = ticker.tick(), if active.is_some() => {
                if let Some((transition, started)) = &active {
                    let elapsed = started.elapsed();
                    displayed = transition.sample_at(elapsed);
                    render(&displayed);
                    if transition.is_complete(elapsed) {
                        active = None;
                    }
                }
            }
        }
    }
}
