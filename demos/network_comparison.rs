//! Walk through the explainer: the novation steps, the bilateral vs CCP
//! networks for a few sizes, and the hypothetical risk trend.

use ccp_novation::graph::comparison::NetworkComparison;
use ccp_novation::narrative::novation::generate_novation_steps;
use ccp_novation::series::risk_exposure::generate_hypothetical_risk_exposure;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("━━━ Novation, step by step ━━━\n");
    for step in generate_novation_steps() {
        println!("{}\n", step);
    }

    println!("━━━ Bilateral vs CCP links ━━━\n");
    println!("{:>4}  {:>9}  {:>4}  {:>6}", "N", "bilateral", "ccp", "saved");
    for n in [2, 3, 5, 10, 20] {
        let cmp = NetworkComparison::new(n)?;
        let links = cmp.links();
        println!(
            "{:>4}  {:>9}  {:>4}  {:>5.1}%",
            n,
            links.bilateral,
            links.ccp,
            links.reduction_percent()
        );
    }

    let cmp = NetworkComparison::new(5)?;
    println!("\n{}", cmp.bilateral());
    println!("{}", cmp.cleared());

    println!("━━━ Hypothetical risk trend ━━━\n");
    for obs in generate_hypothetical_risk_exposure(12)? {
        println!("{}", obs);
    }
    Ok(())
}
