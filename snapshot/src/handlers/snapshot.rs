//! Regenerates the playground: one scaffolded project per allowed flag
//! combination, ready to be committed and diffed against prior releases.

use crate::models::combination::Combination;
use crate::services::filter::apply_denylist;
use crate::services::generator::{self, CombinationSource};
use crate::services::scaffold::Scaffolder;
use crate::services::utils::get_project_root;

use anyhow::{Context, Result};
use std::fs;

/// Feature flags understood by the scaffolder, in canonical order.
///
/// 'eslint-with-oxlint' is not enumerated: the extra projects pushed CI past
/// its open-file limit. It stays denylisted against plain 'eslint' so any
/// stale output is still swept.
const FEATURE_FLAGS: &[&str] = &[
    "bare",
    "typescript",
    "jsx",
    "router",
    "pinia",
    "vitest",
    "cypress",
    "playwright",
    "nightwatch",
    "eslint",
    "prettier",
];

/// Mutually exclusive flag sets; no generated project may carry all the
/// flags of any one entry.
const FEATURE_FLAGS_DENYLIST: &[&[&str]] = &[
    &["cypress", "playwright"],
    &["playwright", "nightwatch"],
    &["cypress", "nightwatch"],
    &["cypress", "playwright", "nightwatch"],
    &["eslint", "eslint-with-oxlint"],
];

/// 'bare' only strips down an otherwise-configured project, so it never
/// appears on its own.
const SUPPLEMENTARY_FLAG: &str = "bare";

/// Hand-authored variants the power set does not produce.
const EXTRA_COMBINATIONS: &[&[&str]] = &[&["default"], &["bare", "default"]];

/// '--with-tests' used to mean '--cypress' alone and now implies
/// '--vitest --cypress'; these variants exist for comparison with older
/// templates and can go away once those are out of support.
const WITH_TESTS_FLAGS: &[&str] = &["typescript", "jsx", "router", "pinia"];
const WITH_TESTS_SUFFIX: &str = "with-tests";

/// Directory under the workspace root holding the generated projects.
const PLAYGROUND_DIR: &str = "playground";

/// Regenerates every playground snapshot project.
///
/// Sweeps the output directory of every candidate combination (including the
/// denylisted ones, so residue from older releases disappears), then drives
/// the scaffolder once per surviving combination, strictly in order. The
/// first failure aborts the whole run.
///
/// # Errors
/// Returns an error if the playground cannot be prepared, a stale project
/// cannot be removed, or any scaffolder invocation fails.
pub fn generate_snapshots() -> Result<()> {
    let candidates = planned_combinations();

    let playground = get_project_root()?.join(PLAYGROUND_DIR);
    fs::create_dir_all(&playground)
        .with_context(|| format!("Failed to prepare '{}'", playground.display()))?;
    let scaffolder = Scaffolder::new(playground);

    // Sweep before filtering so directories of combinations that are no
    // longer allowed disappear as well.
    for combination in &candidates {
        let project_name = combination.project_name();
        println!("🧹 Removing previously generated project {project_name}");
        scaffolder.remove_project(&project_name)?;
    }

    let surviving = apply_denylist(candidates, FEATURE_FLAGS_DENYLIST, SUPPLEMENTARY_FLAG);

    for combination in &surviving {
        scaffolder.generate(combination)?;
    }

    println!("\n✨ Generated {} playground projects.", surviving.len());
    Ok(())
}

/// Every candidate combination, before the denylist is applied.
fn planned_combinations() -> Vec<Combination> {
    generator::collect(&[
        CombinationSource::PowerSet { flags: FEATURE_FLAGS },
        CombinationSource::Fixed { combinations: EXTRA_COMBINATIONS },
        CombinationSource::SuffixedPowerSet { flags: WITH_TESTS_FLAGS, suffix: WITH_TESTS_SUFFIX },
    ])
}
