use crate::{config::PollingConfig, console::Panel};
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior, interval};

/// The three independent refresh timers of the console.
///
/// Every timer fires immediately once, which gives the initial load.
#[derive(Debug)]
pub struct PollTimers {
    instances: Interval,
    dns_logs: Interval,
    dns_direct: Interval,
}

impl PollTimers {
    /// Panics if an interval is zero; `ClientConfig::validate` rejects that.
    pub fn start(polling: &PollingConfig) -> Self {
        Self {
            instances: ticker(polling.instances()),
            dns_logs: ticker(polling.dns_logs()),
            dns_direct: ticker(polling.dns_direct()),
        }
    }

    /// Waits for whichever panel is due next
    pub async fn next_tick(&mut self) -> Panel {
        tokio::select! {
            _ = self.instances.tick() => Panel::Instances,
            _ = self.dns_logs.tick() => Panel::DnsLogs,
            _ = self.dns_direct.tick() => Panel::DnsDirect,
        }
    }

    /// Pushes a panel's next tick one full period into the future
    pub fn restart(&mut self, panel: Panel) {
        match panel {
            Panel::Instances => self.instances.reset(),
            Panel::DnsLogs => self.dns_logs.reset(),
            Panel::DnsDirect => self.dns_direct.reset(),
        }
    }
}

fn ticker(period: Duration) -> Interval {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}
