//! The scene boundary and the selection-aware patch applier.
//!
//! The editor tree never reaches into the rendering engine's internals; it
//! sees entities only as model/nature snapshots behind the narrow [`Scene`]
//! trait, and mutates them exclusively through [`Scene::undoable_change`],
//! one transaction per committed edit.

use serde::{Deserialize, Serialize};

use crate::property::PropertyDescriptor;
use crate::value::{Model, PropertyPatch, PropertyValue};

/// Index of an entity within the scene.
pub type EntityId = usize;

/// One scene-graph node as the property editors see it: a model snapshot and
/// the static property schema of its component type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub model: Model,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nature: Vec<PropertyDescriptor>,
}

impl Entity {
    /// The component type recorded in the model.
    pub fn type_name(&self) -> Option<&str> {
        self.model.string("type")
    }

    /// The user-assigned id recorded in the model.
    pub fn dom_id(&self) -> Option<&str> {
        self.model.string("id").filter(|id| !id.is_empty())
    }

    /// Selector match: `#id`, `.class`, `(self)` within scope, or a bare
    /// type name.
    pub fn matches_selector(&self, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            self.dom_id() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            self.model
                .string("class")
                .is_some_and(|c| c.split_whitespace().any(|part| part == class))
        } else {
            self.type_name() == Some(selector)
        }
    }
}

/// Where one patch of a transaction lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchTarget {
    /// The board root pseudo-entity.
    Root,
    Entity(EntityId),
}

/// One undoable unit: every patch in it reverts together.
pub type Transaction = Vec<(PatchTarget, PropertyPatch)>;

/// The narrow contract with the scene/rendering engine.
pub trait Scene {
    /// The board root, shown when nothing is selected.
    fn root(&self) -> &Entity;

    fn entity(&self, id: EntityId) -> Option<&Entity>;

    /// Current selection, in selection order.
    fn selection(&self) -> &[EntityId];

    /// Applies the whole transaction as a single undo unit. The editors
    /// never mutate a model outside this call.
    fn undoable_change(&mut self, transaction: Transaction);

    /// Entities matching a selector, used by the data-binding mapper to flag
    /// mapping targets. `scope` restricts `(self)`/`(key)` style lookups.
    fn find_all(&self, selector: &str, scope: Option<EntityId>) -> Vec<EntityId>;
}

/// The pinned target patches are applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyTarget {
    Root,
    Single(EntityId),
    Multiple(Vec<EntityId>),
}

/// What the property sidebar shows for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSource {
    pub target: PropertyTarget,
    /// Specific-property descriptors; empty when suppressed (heterogeneous
    /// multi-selection).
    pub descriptors: Vec<PropertyDescriptor>,
    pub model: Model,
}

/// Derives the sidebar's state from the scene selection.
///
/// - nothing selected: the root pseudo-target's own schema and model
/// - one entity: its schema and model
/// - several entities of one type: the shared schema, with the model
///   narrowed to `{type, alpha}`
/// - several entities of mixed types: no schema at all, only the
///   type-agnostic `{alpha}` panel
pub fn panel_source(scene: &dyn Scene) -> PanelSource {
    let selection = scene.selection();
    match selection {
        [] => {
            let root = scene.root();
            PanelSource {
                target: PropertyTarget::Root,
                descriptors: root.nature.clone(),
                model: root.model.clone(),
            }
        }
        [id] => {
            let Some(entity) = scene.entity(*id) else {
                return PanelSource {
                    target: PropertyTarget::Multiple(Vec::new()),
                    descriptors: Vec::new(),
                    model: Model::new(),
                };
            };
            PanelSource {
                target: PropertyTarget::Single(*id),
                descriptors: entity.nature.clone(),
                model: entity.model.clone(),
            }
        }
        ids => {
            let entities: Vec<&Entity> =
                ids.iter().filter_map(|id| scene.entity(*id)).collect();
            let shared_type = entities
                .first()
                .and_then(|first| first.type_name())
                .filter(|t| {
                    entities
                        .iter()
                        .all(|entity| entity.type_name() == Some(*t))
                });

            let mut model = Model::new();
            model.set("alpha", PropertyValue::Number(1.0));
            let descriptors = if let Some(shared) = shared_type {
                model.set("type", PropertyValue::text(shared));
                entities
                    .first()
                    .map(|entity| entity.nature.clone())
                    .unwrap_or_default()
            } else {
                Vec::new()
            };
            PanelSource {
                target: PropertyTarget::Multiple(ids.to_vec()),
                descriptors,
                model,
            }
        }
    }
}

/// Applies one committed patch to the pinned target as a single undoable
/// transaction. With a multi-selection every entity receives the patch
/// inside the same transaction, so one undo reverts all of them. An empty
/// multi-target is a no-op.
pub fn apply_patch(scene: &mut dyn Scene, target: &PropertyTarget, patch: &PropertyPatch) {
    if patch.is_empty() {
        return;
    }
    let transaction: Transaction = match target {
        PropertyTarget::Root => vec![(PatchTarget::Root, patch.clone())],
        PropertyTarget::Single(id) => vec![(PatchTarget::Entity(*id), patch.clone())],
        PropertyTarget::Multiple(ids) => ids
            .iter()
            .map(|id| (PatchTarget::Entity(*id), patch.clone()))
            .collect(),
    };
    if transaction.is_empty() {
        return;
    }
    scene.undoable_change(transaction);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{PropertyDescriptor, PropertyType};

    /// Minimal scene with a grouped undo stack, standing in for the engine.
    struct TestScene {
        root: Entity,
        entities: Vec<Entity>,
        selection: Vec<EntityId>,
        undo_stack: Vec<Transaction>,
    }

    impl TestScene {
        fn new(entities: Vec<Entity>) -> Self {
            let mut root = Entity::default();
            root.model.set("type", PropertyValue::text("board"));
            root.model.set("width", PropertyValue::Number(800.0));
            root.nature = vec![PropertyDescriptor::new(
                "reportName",
                PropertyType::String,
                "Report Name",
            )];
            Self {
                root,
                entities,
                selection: Vec::new(),
                undo_stack: Vec::new(),
            }
        }

        fn model_mut(&mut self, target: PatchTarget) -> &mut Model {
            match target {
                PatchTarget::Root => &mut self.root.model,
                PatchTarget::Entity(id) => &mut self.entities[id].model,
            }
        }

        fn undo(&mut self) {
            if let Some(inverse) = self.undo_stack.pop() {
                for (target, patch) in inverse {
                    self.model_mut(target).merge(&patch);
                }
            }
        }
    }

    impl Scene for TestScene {
        fn root(&self) -> &Entity {
            &self.root
        }

        fn entity(&self, id: EntityId) -> Option<&Entity> {
            self.entities.get(id)
        }

        fn selection(&self) -> &[EntityId] {
            &self.selection
        }

        fn undoable_change(&mut self, transaction: Transaction) {
            let mut inverse = Vec::new();
            for (target, patch) in &transaction {
                let model = self.model_mut(*target);
                let mut before = PropertyPatch::new();
                for (name, _) in patch.iter() {
                    before.insert(
                        name.clone(),
                        model.get(name).cloned().unwrap_or_default(),
                    );
                }
                inverse.push((*target, before));
                model.merge(patch);
            }
            self.undo_stack.push(inverse);
        }

        fn find_all(&self, selector: &str, _scope: Option<EntityId>) -> Vec<EntityId> {
            self.entities
                .iter()
                .enumerate()
                .filter(|(_, entity)| entity.matches_selector(selector))
                .map(|(id, _)| id)
                .collect()
        }
    }

    fn rect(id: Option<&str>) -> Entity {
        let mut entity = Entity::default();
        entity.model.set("type", PropertyValue::text("rect"));
        entity.model.set("hidden", PropertyValue::Bool(false));
        if let Some(id) = id {
            entity.model.set("id", PropertyValue::text(id));
        }
        entity.nature = vec![PropertyDescriptor::new(
            "round",
            PropertyType::Number,
            "Round",
        )];
        entity
    }

    fn label() -> Entity {
        let mut entity = Entity::default();
        entity.model.set("type", PropertyValue::text("label"));
        entity
    }

    #[test]
    fn empty_selection_shows_the_root_pseudo_target() {
        let scene = TestScene::new(vec![rect(None)]);
        let source = panel_source(&scene);
        assert_eq!(source.target, PropertyTarget::Root);
        assert_eq!(source.model.string("type"), Some("board"));
        assert_eq!(source.descriptors.len(), 1);
    }

    #[test]
    fn single_selection_shows_the_entity() {
        let mut scene = TestScene::new(vec![rect(None)]);
        scene.selection = vec![0];
        let source = panel_source(&scene);
        assert_eq!(source.target, PropertyTarget::Single(0));
        assert_eq!(source.model.string("type"), Some("rect"));
        assert_eq!(source.descriptors[0].name, "round");
    }

    #[test]
    fn homogeneous_multi_selection_narrows_to_type_and_alpha() {
        let mut scene = TestScene::new(vec![rect(None), rect(None)]);
        scene.selection = vec![0, 1];
        let source = panel_source(&scene);
        assert_eq!(source.target, PropertyTarget::Multiple(vec![0, 1]));
        assert_eq!(source.model.string("type"), Some("rect"));
        assert_eq!(source.model.number("alpha"), Some(1.0));
        assert_eq!(source.model.boolean("hidden"), None);
        assert_eq!(source.descriptors.len(), 1);
    }

    #[test]
    fn heterogeneous_multi_selection_suppresses_descriptors() {
        let mut scene = TestScene::new(vec![rect(None), label()]);
        scene.selection = vec![0, 1];
        let source = panel_source(&scene);
        assert!(source.descriptors.is_empty());
        assert_eq!(source.model.string("type"), None);
        assert_eq!(source.model.number("alpha"), Some(1.0));
    }

    #[test]
    fn multi_select_patch_fans_out_inside_one_undo_step() {
        let mut scene = TestScene::new(vec![rect(None), rect(None)]);
        scene.selection = vec![0, 1];
        let target = panel_source(&scene).target;

        apply_patch(
            &mut scene,
            &target,
            &PropertyPatch::single("hidden", PropertyValue::Bool(true)),
        );
        assert_eq!(scene.entities[0].model.boolean("hidden"), Some(true));
        assert_eq!(scene.entities[1].model.boolean("hidden"), Some(true));
        assert_eq!(scene.undo_stack.len(), 1);

        scene.undo();
        assert_eq!(scene.entities[0].model.boolean("hidden"), Some(false));
        assert_eq!(scene.entities[1].model.boolean("hidden"), Some(false));
    }

    #[test]
    fn empty_target_is_a_no_op() {
        let mut scene = TestScene::new(vec![rect(None)]);
        apply_patch(
            &mut scene,
            &PropertyTarget::Multiple(Vec::new()),
            &PropertyPatch::single("hidden", PropertyValue::Bool(true)),
        );
        assert!(scene.undo_stack.is_empty());
    }

    #[test]
    fn root_target_edits_the_root_model() {
        let mut scene = TestScene::new(vec![]);
        apply_patch(
            &mut scene,
            &PropertyTarget::Root,
            &PropertyPatch::single("width", PropertyValue::Number(1024.0)),
        );
        assert_eq!(scene.root.model.number("width"), Some(1024.0));
        scene.undo();
        assert_eq!(scene.root.model.number("width"), Some(800.0));
    }

    #[test]
    fn selectors_match_id_class_and_type() {
        let mut tagged = rect(Some("tank1"));
        tagged.model.set("class", PropertyValue::text("gauge wide"));
        let scene = TestScene::new(vec![tagged, rect(None), label()]);

        assert_eq!(scene.find_all("#tank1", None), vec![0]);
        assert_eq!(scene.find_all(".gauge", None), vec![0]);
        assert_eq!(scene.find_all("rect", None), vec![0, 1]);
        assert_eq!(scene.find_all("label", None), vec![2]);
        assert!(scene.find_all("#absent", None).is_empty());
    }

    /// End-to-end: edit the second gradient stop's color through the builder
    /// path and expect exactly one fillStyle patch with everything else
    /// intact.
    #[test]
    fn gradient_stop_edit_produces_one_fill_style_patch() {
        use crate::fill::{FillValue, GradientValue};
        use crate::stops::ColorStop;

        let mut entity = rect(None);
        let gradient = GradientValue {
            kind: crate::fill::GradientKind::Linear,
            color_stops: vec![
                ColorStop::new(0.0, "#000"),
                ColorStop::new(1.0, "#fff"),
            ],
            rotation: 0.0,
            center: None,
        };
        entity
            .model
            .set("fillStyle", PropertyValue::Fill(FillValue::Gradient(gradient)));
        let mut scene = TestScene::new(vec![entity]);
        scene.selection = vec![0];
        let source = panel_source(&scene);

        // the fill-style editor picks up the model value...
        let FillValue::Gradient(mut gradient) =
            source.model.get("fillStyle").map(PropertyValue::as_fill).unwrap()
        else {
            panic!("expected a gradient fill");
        };
        // ...the user edits the second stop's color via the side editor...
        let mut picker = crate::stops::StopPicker::new(0.0, 1.0);
        picker.replace_stops(gradient.color_stops.clone());
        picker.select(1);
        picker.set_focused_color("#00ff00");
        gradient.color_stops = picker.stops().to_vec();

        // ...and the commit travels as one property-change patch.
        let patch = PropertyPatch::single(
            "fillStyle",
            PropertyValue::from(FillValue::Gradient(gradient)),
        );
        assert_eq!(patch.len(), 1);
        apply_patch(&mut scene, &source.target, &patch);

        let FillValue::Gradient(applied) = scene.entities[0]
            .model
            .get("fillStyle")
            .map(PropertyValue::as_fill)
            .unwrap()
        else {
            panic!("expected a gradient fill after the edit");
        };
        assert_eq!(
            applied.color_stops,
            vec![ColorStop::new(0.0, "#000"), ColorStop::new(1.0, "#00ff00")]
        );
        assert_eq!(applied.rotation, 0.0);
        assert_eq!(applied.kind, crate::fill::GradientKind::Linear);
    }
}
