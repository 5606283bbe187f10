use anyhow::{bail, Context, Result};
use tracing::{debug, error, info};
use triplet_sum::{find_zero_triplets, parse_sequence, scenario::SCENARIOS, Triplet};

mod config;
mod telemetry;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    telemetry::init()?;
    let config = config::init()?;
    debug!(%config, "loaded config");

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if !args.is_empty() {
        let input = args.join(" ");
        let nums = parse_sequence(&input).with_context(|| format!("could not parse input '{input}'"))?;

        for triplet in find_zero_triplets(&nums) {
            println!("{triplet}");
        }
        return Ok(());
    }

    let mut failed = 0;
    for (i, scenario) in SCENARIOS.iter().enumerate() {
        let outcome = scenario.run(config.brute_force_max_len());

        let fields = (
            format!("{:?}", scenario.input),
            format_triplets(&scenario.expected()),
            format_triplets(&outcome.result),
        );
        if outcome.passed() {
            info!(
                input = fields.0,
                expected = fields.1,
                got = fields.2,
                brute_force_match = ?outcome.brute_force_matches,
                "test {}: {} PASS",
                i + 1,
                scenario.name
            );
        } else {
            failed += 1;
            error!(
                input = fields.0,
                expected = fields.1,
                got = fields.2,
                brute_force_match = ?outcome.brute_force_matches,
                "test {}: {} FAIL",
                i + 1,
                scenario.name
            );
        }
    }

    let example = [0, -1, 2, -3, 1];
    info!(
        input = ?example,
        triplets = format_triplets(&find_zero_triplets(&example)),
        "interactive example"
    );

    if failed > 0 {
        bail!("{failed} of {} scenarios failed", SCENARIOS.len());
    }

    Ok(())
}

fn format_triplets(triplets: &[Triplet]) -> String {
    let inner = triplets.iter().map(Triplet::to_string).collect::<Vec<_>>().join(", ");
    format!("[{inner}]")
}
