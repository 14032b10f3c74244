//! Bevy integration for the impact model.
//!
//! The presentation layer edits [`ImpactParameters`]; whenever they (or the
//! model coefficients, ranges or ring resolution) change, the assessment is
//! recomputed:
//! - Parameters are validated against [`ParameterRanges`] (advisory only)
//! - The model is evaluated with the km/s → m/s conversion applied
//! - Effect rings are built around the selected ground zero, if any

use bevy::prelude::*;

use crate::geodesic::{GeodesicRing, RingBuilder};
use crate::impact::{ImpactModel, ImpactResults};
use crate::params::{ImpactParameters, ParameterError, ParameterRanges};

/// Plugin providing impact assessment resources and systems.
pub struct ImpactPlugin;

impl Plugin for ImpactPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ImpactParameters>()
            .init_resource::<ParameterRanges>()
            .init_resource::<ImpactModel>()
            .init_resource::<RingBuilder>()
            .init_resource::<ImpactAssessment>()
            .add_systems(Update, assess_impact.run_if(should_reassess));
    }
}

/// Latest evaluation of the current parameters.
#[derive(Resource, Clone, Debug, Default)]
pub struct ImpactAssessment {
    /// Model output. `None` until the first evaluation.
    pub results: Option<ImpactResults>,
    /// Overlay polygons, outermost first. Empty without a location.
    pub rings: Vec<GeodesicRing>,
    /// Why the parameters fall outside the supported ranges, if they do.
    pub warning: Option<ParameterError>,
}

impl ImpactAssessment {
    /// Evaluate `params` and build their overlay.
    pub fn compute(
        params: &ImpactParameters,
        ranges: &ParameterRanges,
        model: &ImpactModel,
        builder: &RingBuilder,
    ) -> Self {
        let warning = params.validate(ranges).err();
        let results = model.evaluate(params.to_inputs());

        let rings = match params.location {
            Some(center) => builder.build(center, &results.effect_rings()),
            None => Vec::new(),
        };

        Self {
            results: Some(results),
            rings,
            warning,
        }
    }

    /// Find the overlay ring with the given id.
    pub fn ring(&self, id: &str) -> Option<&GeodesicRing> {
        self.rings.iter().find(|r| r.ring.id == id)
    }
}

/// Run condition: any input to the assessment changed since the last run.
fn should_reassess(
    params: Res<ImpactParameters>,
    ranges: Res<ParameterRanges>,
    model: Res<ImpactModel>,
    builder: Res<RingBuilder>,
) -> bool {
    params.is_changed() || ranges.is_changed() || model.is_changed() || builder.is_changed()
}

/// Recompute the assessment from the current parameters.
pub fn assess_impact(
    params: Res<ImpactParameters>,
    ranges: Res<ParameterRanges>,
    model: Res<ImpactModel>,
    builder: Res<RingBuilder>,
    mut assessment: ResMut<ImpactAssessment>,
) {
    let next = ImpactAssessment::compute(&params, &ranges, &model, &builder);

    if let Some(err) = &next.warning {
        warn!("Impact parameters outside supported range: {}", err);
    }
    if let Some(results) = &next.results {
        debug!(
            "Impact assessed: {:.3e} Mt, crater {:.2} km, {} overlay rings",
            results.energy_megatons(),
            results.crater_diameter,
            next.rings.len()
        );
    }

    *assessment = next;
}
