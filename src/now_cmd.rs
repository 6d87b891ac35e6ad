//! Now command: read the current instant through an offset clock.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::TimeDelta;
use tracing::{info, info_span};

use almanac_clock::{Clock, FixedClock, OffsetClock, SystemClock};

use crate::cli::NowArgs;
use crate::config::AlmanacConfig;

/// Run the clock read.
pub fn run(args: NowArgs) -> Result<()> {
    let _cmd = info_span!("now").entered();
    let config = AlmanacConfig::load(args.config.as_deref())?;
    let clock = build_clock(&config, &args)?;

    let instant = clock.time().context("failed to read clock")?;
    println!("{}", instant.to_rfc3339());
    Ok(())
}

/// Builds the offset clock described by config, with CLI flags taking precedence.
pub fn build_clock(config: &AlmanacConfig, args: &NowArgs) -> Result<OffsetClock> {
    let offset_seconds = args.offset_seconds.unwrap_or(config.clock.offset_seconds);
    let offset = TimeDelta::try_seconds(offset_seconds)
        .with_context(|| format!("offset out of range: {offset_seconds} seconds"))?;

    let reference: Arc<dyn Clock> = match args.fixed.or(config.clock.fixed) {
        Some(instant) => {
            info!(%instant, "using fixed clock");
            Arc::new(FixedClock::new(instant))
        }
        None => Arc::new(SystemClock),
    };

    info!(offset_seconds, "clock configured");
    Ok(OffsetClock::new(reference, offset))
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::config::ClockToml;

    fn instant(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn args() -> NowArgs {
        NowArgs {
            config: None,
            offset_seconds: None,
            fixed: None,
        }
    }

    #[test]
    fn config_offset_and_fixed() {
        let config = AlmanacConfig {
            clock: ClockToml {
                offset_seconds: 5,
                fixed: Some(instant("2024-01-01T00:00:00Z")),
            },
        };
        let clock = build_clock(&config, &args()).unwrap();
        assert_eq!(clock.time().unwrap(), instant("2024-01-01T00:00:05Z"));
    }

    #[test]
    fn flags_override_config() {
        let config = AlmanacConfig {
            clock: ClockToml {
                offset_seconds: 5,
                fixed: Some(instant("2024-01-01T00:00:00Z")),
            },
        };
        let a = NowArgs {
            config: None,
            offset_seconds: Some(-60),
            fixed: Some(instant("2030-06-15T12:00:00Z")),
        };
        let clock = build_clock(&config, &a).unwrap();
        assert_eq!(clock.time().unwrap(), instant("2030-06-15T11:59:00Z"));
    }

    #[test]
    fn defaults_to_system_clock() {
        let clock = build_clock(&AlmanacConfig::default(), &args()).unwrap();
        assert_eq!(clock.offset(), TimeDelta::zero());
        let before = Utc::now();
        let t = clock.time().unwrap();
        assert!(t >= before);
    }

    #[test]
    fn offset_out_of_range() {
        let a = NowArgs {
            offset_seconds: Some(i64::MAX),
            ..args()
        };
        let err = build_clock(&AlmanacConfig::default(), &a).unwrap_err();
        assert!(err.to_string().starts_with("offset out of range"));
    }
}
