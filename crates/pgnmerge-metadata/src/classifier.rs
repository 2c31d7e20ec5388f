#![deny(unsafe_code)]

use tracing::trace;

use pgnmerge_model::{Classification, ParameterKey};

use crate::{DescriptionStore, MetadataError};

/// Marker token in a description that indicates an enumerated, state-valued
/// parameter (e.g. `"16 states/4 bit"`). Descriptions of continuous
/// parameters carry a unit resolution instead (e.g. `"0.125 rpm/bit"`).
///
/// The substring rule is deliberately contained here: if the reference data
/// ever grows a structured discreteness field, only this function changes.
pub const DISCRETE_MARKER: &str = "states";

/// Resolve the value domain of one parameter column.
///
/// Looks up the description for the SPN half of the key; a lookup miss
/// propagates as [`MetadataError::NotFound`] rather than defaulting, since a
/// wrong guess corrupts the filled signal.
pub fn classify<S>(store: &S, key: ParameterKey) -> Result<Classification, MetadataError>
where
    S: DescriptionStore + ?Sized,
{
    let description = store.lookup_description(key.spn)?;
    let classification = if description.contains(DISCRETE_MARKER) {
        Classification::Discrete
    } else {
        Classification::Continuous
    };
    trace!(%key, %classification, "classified parameter");
    Ok(classification)
}
