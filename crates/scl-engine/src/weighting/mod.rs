//! Weight resolution

pub mod adjustments;

use scl_common::{Context, WeightMode, WeightTable};
use tracing::{debug, instrument};

use self::adjustments::DYNAMIC_ADJUSTMENTS;

/// Resolve the weight table for a mode and context
///
/// Static mode returns the default table. Dynamic mode runs every applicable
/// adjustment on a working copy and normalizes once at the end.
#[instrument(skip(context), fields(keys = context.len()))]
pub fn resolve_weights(mode: WeightMode, context: &Context) -> WeightTable {
    match mode {
        WeightMode::Static => WeightTable::canonical(),
        WeightMode::Dynamic => {
            let mut working = WeightTable::canonical();
            for step in DYNAMIC_ADJUSTMENTS.iter() {
                if (step.applies)(context) {
                    (step.apply)(&mut working);
                    debug!(step = step.name, total = working.total(), "Applied weight adjustment");
                }
            }
            working.normalized()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scl_common::types::context::{HUMAN_OVERRIDE_PRESENT, SENSOR_DEGRADATION, UNSUPERVISED_FSD};
    use scl_common::{AI_TRANSFORMATION, HUMAN_INPUT, OUTPUT_ACTION, SHARED_STATE};

    fn context(fsd: bool, human_override: bool, degradation: bool) -> Context {
        Context::new()
            .with_flag(UNSUPERVISED_FSD, fsd)
            .with_flag(HUMAN_OVERRIDE_PRESENT, human_override)
            .with_flag(SENSOR_DEGRADATION, degradation)
    }

    fn assert_weights(table: &WeightTable, expected: [f64; 4]) {
        let names = [HUMAN_INPUT, AI_TRANSFORMATION, SHARED_STATE, OUTPUT_ACTION];
        for (name, want) in names.iter().zip(expected) {
            let got = table.get(name).unwrap();
            assert!((got - want).abs() < 1e-12, "{}: {} != {}", name, got, want);
        }
    }

    #[test]
    fn test_static_ignores_context() {
        let table = resolve_weights(WeightMode::Static, &context(true, true, true));
        assert_eq!(table, WeightTable::canonical());
    }

    #[test]
    fn test_dynamic_without_flags_is_default() {
        let table = resolve_weights(WeightMode::Dynamic, &Context::new());
        assert_eq!(table, WeightTable::canonical());

        let table = resolve_weights(WeightMode::Dynamic, &context(false, false, false));
        assert_eq!(table, WeightTable::canonical());
    }

    #[test]
    fn test_all_flag_combinations_normalized() {
        for mask in 0u8..8 {
            let ctx = context(mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
            let table = resolve_weights(WeightMode::Dynamic, &ctx);
            assert!(table.is_normalized(), "mask {} sums to {}", mask, table.total());
            assert_eq!(table.len(), 4);
        }
    }

    #[test]
    fn test_human_override_only() {
        let table = resolve_weights(WeightMode::Dynamic, &context(false, true, false));
        let rest = 0.25 / 1.10;
        assert_weights(&table, [0.35 / 1.10, rest, rest, rest]);
    }

    #[test]
    fn test_sensor_degradation_only() {
        let table = resolve_weights(WeightMode::Dynamic, &context(false, false, true));
        assert_weights(&table, [0.25 / 1.15, 0.35 / 1.15, 0.30 / 1.15, 0.25 / 1.15]);
    }

    #[test]
    fn test_unsupervised_only() {
        let table = resolve_weights(WeightMode::Dynamic, &context(true, false, false));
        assert_weights(&table, [0.20, 0.28, 0.20, 0.32]);
    }

    #[test]
    fn test_all_flags() {
        let table = resolve_weights(WeightMode::Dynamic, &context(true, true, true));
        // 0.35 + 0.45 + 0.30 + 0.40 = 1.50
        assert_weights(&table, [0.35 / 1.5, 0.45 / 1.5, 0.30 / 1.5, 0.40 / 1.5]);
    }
}
