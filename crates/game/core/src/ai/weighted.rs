//! Cumulative-weight random selection.

use crate::env::Dice;

/// Pick one item with probability proportional to its weight.
///
/// Non-positive weights are never chosen while any positive weight exists.
/// A single option is returned without a draw; when every weight is
/// non-positive the pick is uniform over all options.
pub fn pick_weighted<'t, T>(options: &'t [(T, i32)], dice: &mut dyn Dice) -> Option<&'t T> {
    match options {
        [] => None,
        [(only, _)] => Some(only),
        _ => {
            let total: i32 = options.iter().map(|(_, weight)| (*weight).max(0)).sum();
            if total <= 0 {
                let index = dice.range(0, options.len() as i32 - 1) as usize;
                return options.get(index).map(|(item, _)| item);
            }

            let mut draw = dice.range(0, total - 1);
            for (item, weight) in options.iter().filter(|(_, weight)| *weight > 0) {
                if draw < *weight {
                    return Some(item);
                }
                draw -= weight;
            }
            None
        }
    }
}
