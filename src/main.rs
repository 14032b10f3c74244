//! Impact Effects - headless scenario report
//!
//! Runs every preset scenario through the impact plugin and logs the
//! estimated consequences.

use bevy::log::LogPlugin;
use bevy::prelude::*;

use impact_effects::assessment::{ImpactAssessment, ImpactPlugin};
use impact_effects::params::ImpactParameters;
use impact_effects::scenarios::SCENARIOS;

fn main() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default(), ImpactPlugin));

    for scenario in SCENARIOS {
        *app.world_mut().resource_mut::<ImpactParameters>() =
            ImpactParameters::from_scenario(scenario);
        app.update();

        let assessment = app.world().resource::<ImpactAssessment>();
        let Some(results) = &assessment.results else {
            warn!("{}: no assessment produced", scenario.name);
            continue;
        };

        info!("{} - {}", scenario.name, scenario.description);
        info!("  {}", results.summary());
        for geo in &assessment.rings {
            info!(
                "  {:<24} {:>10.2} km ({} vertices)",
                geo.ring.label.as_deref().unwrap_or(&*geo.ring.id),
                geo.ring.radius_km,
                geo.polygon.vertices.len()
            );
        }
    }
}
