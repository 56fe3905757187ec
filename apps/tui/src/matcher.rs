//! Nearest-role matching by squared Euclidean distance over level indices.

use crate::domain::{Dimension, LevelVector, Role};
use crate::error::ValidationError;

/// A role together with its distance from the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub role: &'a Role,
    pub distance: u32,
}

/// `Σ (query[d] - role[d])²` over `dimensions`.
pub fn distance(
    query: &LevelVector,
    role: &Role,
    dimensions: &[Dimension],
) -> Result<u32, ValidationError> {
    dimensions.iter().try_fold(0_u32, |sum, dimension| {
        let wanted = i32::from(query.level_for(dimension)?);
        let actual = i32::from(
            role.levels
                .level_for(dimension)
                .map_err(|err| err.for_role(&role.id))?,
        );
        Ok(sum + (wanted - actual).unsigned_abs().pow(2))
    })
}

/// Role with the smallest distance to `query`; the earliest role wins ties.
///
/// Returns `Ok(None)` only for an empty role list. An incomplete or
/// out-of-range query is rejected instead of being matched.
pub fn find_nearest<'a>(
    query: &LevelVector,
    roles: &'a [Role],
    dimensions: &[Dimension],
) -> Result<Option<Match<'a>>, ValidationError> {
    query.validate(dimensions)?;

    let mut best: Option<Match<'a>> = None;
    for role in roles {
        let distance = distance(query, role, dimensions)?;
        if best.map_or(true, |current| distance < current.distance) {
            best = Some(Match { role, distance });
        }
    }

    Ok(best)
}

/// Every role ordered by distance, catalog order on ties.
pub fn rank<'a>(
    query: &LevelVector,
    roles: &'a [Role],
    dimensions: &[Dimension],
) -> Result<Vec<Match<'a>>, ValidationError> {
    query.validate(dimensions)?;

    let mut ranked = roles
        .iter()
        .map(|role| distance(query, role, dimensions).map(|distance| Match { role, distance }))
        .collect::<Result<Vec<_>, _>>()?;
    ranked.sort_by_key(|found| found.distance);
    Ok(ranked)
}
