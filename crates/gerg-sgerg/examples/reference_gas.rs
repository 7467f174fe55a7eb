//! Compression factor of the reference gas over the metering pressure range.
//!
//! Solver iteration counts are logged at debug level.

use gerg_sgerg::{Sgerg, SimplifiedAnalysis};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let calculator = Sgerg::new();
    println!("{:>8} {:>10} {:>12} {:>10}", "p [bar]", "Z", "D [mol/m³]", "ρ [kg/m³]");

    for p in [1.0, 8.0, 20.0, 40.0, 60.0, 80.0, 120.0] {
        let analysis = SimplifiedAnalysis::new(0.01, 37.0, 0.7443, 0.0, p, 15.0);
        let solution = calculator.solve(&analysis)?;
        let props = solution.properties;
        println!(
            "{:>8.1} {:>10.6} {:>12.3} {:>10.4}",
            p,
            props.z,
            props.d,
            props.mass_density()
        );
    }

    let composition = calculator
        .solve(&SimplifiedAnalysis::new(0.01, 37.0, 0.7443, 0.0, 8.0, 15.0))?
        .composition;
    println!();
    for (component, fraction) in composition.iter() {
        println!("{component:?}: {fraction:.6}");
    }

    Ok(())
}
