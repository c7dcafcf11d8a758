//! A single left-to-right pass of one rule over one word.

use soundshift_foundation::{Error, Result};
use soundshift_notation::Rule;
use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::word::Word;

/// Sweeps `rule` across `word`, executing its change wherever the target
/// matches and the environment allows it.
///
/// Returns the number of changes executed.
///
/// # Errors
/// Returns a limit error if the sweep takes more than
/// [`EngineConfig::max_steps`] steps beyond the word's starting length,
/// which happens when a change keeps feeding the cursor new matches.
pub fn sweep(rule: &Rule, word: &mut Word, config: &EngineConfig) -> Result<usize> {
    let budget = config.max_steps.saturating_add(word.symbols().len());
    let mut steps = 0;
    let mut changes = 0;

    word.rewind();
    while word.advance() {
        steps += 1;
        if steps > budget {
            return Err(Error::limit_exceeded(config.max_steps, &rule.source));
        }

        let matched = match &rule.target {
            Some(target) => match word.match_target(target) {
                Some(matched) => matched,
                None => continue,
            },
            None => 0,
        };
        trace!(rule = %rule, index = word.index(), matched, "target matched");

        let Some(change) = rule.select_change(&*word, matched) else {
            continue;
        };

        let before = word.to_string();
        word.execute(change, matched, config.cursor_policy);
        changes += 1;
        debug!(rule = %rule, %before, after = %word, "change applied");
    }

    Ok(changes)
}
