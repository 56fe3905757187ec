//! Which level vectors the radar shows for a given session.

use crate::catalog::Catalog;
use crate::domain::{Dimension, LevelVector, Role, MAX_LEVEL};
use crate::error::ValidationError;
use crate::matcher;
use crate::radar::{Layer, LayerColor, LayerPoint};
use crate::session::{ActiveTab, CompareSlot, SessionState};

pub const CUSTOM_LAYER: &str = "custom";
pub const NEAREST_LAYER: &str = "nearest";
pub const SELECTED_LAYER: &str = "selected";

fn points(
    levels: &LevelVector,
    dimensions: &[Dimension],
) -> Result<Vec<LayerPoint>, ValidationError> {
    dimensions
        .iter()
        .map(|dimension| {
            Ok(LayerPoint {
                dimension_id: dimension.id.clone(),
                value: levels.level_for(dimension)?,
                max: MAX_LEVEL,
            })
        })
        .collect()
}

fn role_layer(
    id: &str,
    label: String,
    color: LayerColor,
    role: &Role,
    dimensions: &[Dimension],
) -> Result<Layer, ValidationError> {
    Ok(Layer {
        id: id.to_string(),
        label,
        color,
        visible: true,
        points: points(&role.levels, dimensions).map_err(|err| err.for_role(&role.id))?,
    })
}

/// Layers for the session's active tab, back to front.
pub fn chart_layers(state: &SessionState, catalog: &Catalog) -> Result<Vec<Layer>, ValidationError> {
    let dimensions = catalog.dimensions();
    let mut layers = Vec::new();

    if state.active_tab == ActiveTab::Compare {
        for (slot, id, color) in [
            (CompareSlot::First, "compare-1", LayerColor::CompareFirst),
            (CompareSlot::Second, "compare-2", LayerColor::CompareSecond),
        ] {
            if let Some(role) = state.compared_role(catalog, slot) {
                layers.push(role_layer(id, role.name.clone(), color, role, dimensions)?);
            }
        }
        return Ok(layers);
    }

    if state.show_custom_role {
        layers.push(Layer {
            id: CUSTOM_LAYER.to_string(),
            label: state.custom_role.name.clone(),
            color: LayerColor::Primary,
            visible: true,
            points: points(&state.custom_role.levels, dimensions)?,
        });
    }

    if state.show_nearest_role {
        let nearest = matcher::find_nearest(&state.custom_role.levels, catalog.roles(), dimensions)?;
        if let Some(found) = nearest {
            layers.push(role_layer(
                NEAREST_LAYER,
                format!("Nearest: {}", found.role.name),
                LayerColor::Muted,
                found.role,
                dimensions,
            )?);
        }
    }

    if let Some(role) = state.selected_role(catalog) {
        layers.push(role_layer(
            SELECTED_LAYER,
            role.name.clone(),
            LayerColor::Accent,
            role,
            dimensions,
        )?);
    }

    Ok(layers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radar;
    use crate::error::LadderError;
    use crate::session::SessionEvent;

    fn ids(layers: &[Layer]) -> Vec<&str> {
        layers.iter().map(|layer| layer.id.as_str()).collect()
    }

    #[test]
    fn explore_tab_shows_custom_and_nearest() -> Result<(), ValidationError> {
        let catalog = Catalog::builtin();
        let state = SessionState::initial(&catalog);
        let layers = chart_layers(&state, &catalog)?;

        assert_eq!(ids(&layers), ["custom", "nearest"]);
        assert_eq!(layers[0].label, "Custom Role");
        assert_eq!(layers[0].color, LayerColor::Primary);
        assert_eq!(layers[1].label, "Nearest: Junior Software Engineer");
        assert_eq!(layers[1].color, LayerColor::Muted);
        assert!(layers
            .iter()
            .all(|layer| layer.points.len() == 5 && layer.points.iter().all(|p| p.max == 4)));
        Ok(())
    }

    #[test]
    fn selected_role_is_drawn_last() -> Result<(), LadderError> {
        let catalog = Catalog::builtin();
        let state = SessionState::initial(&catalog)
            .apply(SessionEvent::ToggleNearest, &catalog)?
            .apply(SessionEvent::SelectRole(Some("staff-engineer".to_string())), &catalog)?;
        let layers = chart_layers(&state, &catalog)?;

        assert_eq!(ids(&layers), ["custom", "selected"]);
        assert_eq!(layers[1].color, LayerColor::Accent);
        let technology = layers[1]
            .points
            .iter()
            .find(|point| point.dimension_id == "technology")
            .map(|point| point.value);
        assert_eq!(technology, Some(4));
        Ok(())
    }

    #[test]
    fn hidden_toggles_remove_layers() -> Result<(), LadderError> {
        let catalog = Catalog::builtin();
        let state = SessionState::initial(&catalog)
            .apply(SessionEvent::ToggleNearest, &catalog)?
            .apply(SessionEvent::ToggleCustom, &catalog)?;

        assert!(chart_layers(&state, &catalog)?.is_empty());
        Ok(())
    }

    #[test]
    fn compare_tab_shows_only_compared_roles() -> Result<(), LadderError> {
        let catalog = Catalog::builtin();
        let state = SessionState::initial(&catalog)
            .apply(SessionEvent::SetTab(ActiveTab::Compare), &catalog)?
            .apply(
                SessionEvent::SetCompare {
                    slot: CompareSlot::Second,
                    role_id: Some("senior-engineer".to_string()),
                },
                &catalog,
            )?;
        let layers = chart_layers(&state, &catalog)?;
        assert_eq!(ids(&layers), ["compare-2"]);
        assert_eq!(layers[0].color, LayerColor::CompareSecond);

        let state = state.apply(
            SessionEvent::SetCompare {
                slot: CompareSlot::First,
                role_id: Some("software-engineer".to_string()),
            },
            &catalog,
        )?;
        let layers = chart_layers(&state, &catalog)?;
        assert_eq!(ids(&layers), ["compare-1", "compare-2"]);
        assert_eq!(layers[0].label, "Software Engineer");
        Ok(())
    }

    #[test]
    fn composed_layers_lay_out_cleanly() -> Result<(), ValidationError> {
        let catalog = Catalog::builtin();
        let state = SessionState::initial(&catalog);
        let layers = chart_layers(&state, &catalog)?;
        let layout = radar::layout(&layers, catalog.dimensions(), 140.0)?;

        assert_eq!(layout.vertices.len(), layers.len());
        assert!(layout.vertices.iter().all(|polygon| polygon.len() == 5));
        Ok(())
    }
}
