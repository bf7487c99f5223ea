//! The demo board: an in-memory scene standing in for the external
//! rendering engine.
//!
//! It implements the core `Scene` trait with a grouped undo/redo stack so the
//! editor tree has a live target. Everything the real engine would consume
//! (models, natures, transactions) flows through the same boundary.

use board_core::{
    Entity, EntityId, Model, OptionSpec, PatchTarget, PropertyDescriptor, PropertyPatch,
    PropertyType, PropertyValue, Scene, Transaction,
};
use serde::{Deserialize, Serialize};

/// Serialized board: the root pseudo-entity plus the component list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardDocument {
    pub root: Entity,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

/// One primitive change; a user action groups several into one undo entry.
#[derive(Debug, Clone, PartialEq)]
enum Step {
    Patch {
        forward: Vec<(PatchTarget, PropertyPatch)>,
        inverse: Vec<(PatchTarget, PropertyPatch)>,
    },
    Insert {
        index: usize,
        entity: Entity,
    },
    Remove {
        index: usize,
    },
}

/// Alignment edges offered by the edit toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignEdge {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

/// Z-order moves offered by the edit toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZOrderOp {
    Front,
    Back,
    Forward,
    Backward,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoBoard {
    root: Entity,
    entities: Vec<Entity>,
    selection: Vec<EntityId>,
    undo_stack: Vec<Vec<Step>>,
    redo_stack: Vec<Vec<Step>>,
}

impl DemoBoard {
    pub fn new() -> Self {
        Self::from_document(default_document())
    }

    pub fn from_document(document: BoardDocument) -> Self {
        Self {
            root: document.root,
            entities: document.entities,
            selection: Vec::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn to_document(&self) -> BoardDocument {
        BoardDocument {
            root: self.root.clone(),
            entities: self.entities.clone(),
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn selected_ids(&self) -> Vec<EntityId> {
        self.selection.clone()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn select(&mut self, selection: Vec<EntityId>) {
        self.selection = selection
            .into_iter()
            .filter(|id| *id < self.entities.len())
            .collect();
    }

    pub fn toggle_select(&mut self, id: EntityId) {
        if let Some(at) = self.selection.iter().position(|sel| *sel == id) {
            self.selection.remove(at);
        } else if id < self.entities.len() {
            self.selection.push(id);
        }
    }

    fn model_mut(&mut self, target: PatchTarget) -> Option<&mut Model> {
        match target {
            PatchTarget::Root => Some(&mut self.root.model),
            PatchTarget::Entity(id) => self.entities.get_mut(id).map(|entity| &mut entity.model),
        }
    }

    /// Applies one primitive step and returns its inverse.
    fn apply_step(&mut self, step: Step) -> Step {
        match step {
            Step::Patch { forward, inverse } => {
                for (target, patch) in &forward {
                    if let Some(model) = self.model_mut(*target) {
                        model.merge(patch);
                    }
                }
                Step::Patch {
                    forward: inverse,
                    inverse: forward,
                }
            }
            Step::Insert { index, entity } => {
                let index = index.min(self.entities.len());
                self.entities.insert(index, entity);
                Step::Remove { index }
            }
            Step::Remove { index } => {
                let entity = self.entities.remove(index);
                self.selection.retain(|id| *id != index);
                for id in &mut self.selection {
                    if *id > index {
                        *id -= 1;
                    }
                }
                Step::Insert { index, entity }
            }
        }
    }

    /// Runs a grouped action: applies every step, records one undo entry.
    fn run(&mut self, steps: Vec<Step>) {
        if steps.is_empty() {
            return;
        }
        let mut inverse: Vec<Step> = steps
            .into_iter()
            .map(|step| self.apply_step(step))
            .collect();
        inverse.reverse();
        self.undo_stack.push(inverse);
        self.redo_stack.clear();
    }

    pub fn undo(&mut self) {
        if let Some(steps) = self.undo_stack.pop() {
            let mut inverse: Vec<Step> = steps
                .into_iter()
                .map(|step| self.apply_step(step))
                .collect();
            inverse.reverse();
            self.redo_stack.push(inverse);
        }
    }

    pub fn redo(&mut self) {
        if let Some(steps) = self.redo_stack.pop() {
            let mut inverse: Vec<Step> = steps
                .into_iter()
                .map(|step| self.apply_step(step))
                .collect();
            inverse.reverse();
            self.undo_stack.push(inverse);
        }
    }

    pub fn add_entity(&mut self, entity: Entity) {
        let index = self.entities.len();
        self.run(vec![Step::Insert { index, entity }]);
        self.selection = vec![index];
    }

    pub fn delete(&mut self, ids: &[EntityId]) {
        let mut sorted: Vec<EntityId> = ids
            .iter()
            .copied()
            .filter(|id| *id < self.entities.len())
            .collect();
        sorted.sort_unstable();
        sorted.dedup();
        // remove back to front so earlier indices stay valid
        let steps = sorted
            .into_iter()
            .rev()
            .map(|index| Step::Remove { index })
            .collect();
        self.run(steps);
    }

    fn bounds_of(model: &Model) -> (f64, f64, f64, f64) {
        let x = model.number("x").unwrap_or(0.0);
        let y = model.number("y").unwrap_or(0.0);
        let width = model.number("width").unwrap_or(0.0);
        let height = model.number("height").unwrap_or(0.0);
        (x, y, width, height)
    }

    /// Aligns the selected entities to the selection's bounding extent, as
    /// one undo unit. Needs at least two entities.
    pub fn align(&mut self, edge: AlignEdge) {
        if self.selection.len() < 2 {
            return;
        }
        let bounds: Vec<(EntityId, (f64, f64, f64, f64))> = self
            .selection
            .iter()
            .filter_map(|id| {
                self.entities
                    .get(*id)
                    .map(|entity| (*id, Self::bounds_of(&entity.model)))
            })
            .collect();
        let min_x = bounds.iter().map(|(_, b)| b.0).fold(f64::MAX, f64::min);
        let max_x = bounds.iter().map(|(_, b)| b.0 + b.2).fold(f64::MIN, f64::max);
        let min_y = bounds.iter().map(|(_, b)| b.1).fold(f64::MAX, f64::min);
        let max_y = bounds.iter().map(|(_, b)| b.1 + b.3).fold(f64::MIN, f64::max);

        let mut forward = Vec::new();
        let mut inverse = Vec::new();
        for (id, (x, y, width, height)) in bounds {
            let (name, from, to) = match edge {
                AlignEdge::Left => ("x", x, min_x),
                AlignEdge::Center => ("x", x, (min_x + max_x) / 2.0 - width / 2.0),
                AlignEdge::Right => ("x", x, max_x - width),
                AlignEdge::Top => ("y", y, min_y),
                AlignEdge::Middle => ("y", y, (min_y + max_y) / 2.0 - height / 2.0),
                AlignEdge::Bottom => ("y", y, max_y - height),
            };
            forward.push((
                PatchTarget::Entity(id),
                PropertyPatch::single(name, PropertyValue::Number(to)),
            ));
            inverse.push((
                PatchTarget::Entity(id),
                PropertyPatch::single(name, PropertyValue::Number(from)),
            ));
        }
        self.run(vec![Step::Patch { forward, inverse }]);
    }

    /// Moves the selected entities in the draw order, as one undo unit.
    pub fn reorder(&mut self, op: ZOrderOp) {
        let mut selected: Vec<EntityId> = self
            .selection
            .iter()
            .copied()
            .filter(|id| *id < self.entities.len())
            .collect();
        if selected.is_empty() {
            return;
        }
        selected.sort_unstable();

        let mut steps = Vec::new();
        match op {
            ZOrderOp::Front => {
                // pull out back to front, append in original order
                let last = self.entities.len() - 1;
                for index in selected.iter().rev() {
                    steps.push(Step::Remove { index: *index });
                }
                for (offset, index) in selected.iter().enumerate() {
                    let entity = self.entities[*index].clone();
                    steps.push(Step::Insert {
                        index: last - (selected.len() - 1) + offset,
                        entity,
                    });
                }
            }
            ZOrderOp::Back => {
                for index in selected.iter().rev() {
                    steps.push(Step::Remove { index: *index });
                }
                for (offset, index) in selected.iter().enumerate() {
                    let entity = self.entities[*index].clone();
                    steps.push(Step::Insert {
                        index: offset,
                        entity,
                    });
                }
            }
            ZOrderOp::Forward | ZOrderOp::Backward => {
                // single-step move, one selected entity only
                let [index] = selected[..] else {
                    return;
                };
                let to = match op {
                    ZOrderOp::Forward if index + 1 < self.entities.len() => index + 1,
                    ZOrderOp::Backward if index > 0 => index - 1,
                    _ => return,
                };
                let entity = self.entities[index].clone();
                steps.push(Step::Remove { index });
                steps.push(Step::Insert { index: to, entity });
            }
        }
        self.run(steps);
        self.selection.clear();
    }
}

impl Default for DemoBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for DemoBoard {
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
        let mut forward = Vec::new();
        let mut inverse = Vec::new();
        for (target, patch) in transaction {
            let Some(model) = self.model_mut(target) else {
                continue;
            };
            let mut before = PropertyPatch::new();
            for (name, _) in patch.iter() {
                before.insert(name.clone(), model.get(name).cloned().unwrap_or_default());
            }
            inverse.push((target, before));
            forward.push((target, patch));
        }
        self.run(vec![Step::Patch { forward, inverse }]);
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

/// A fresh board document.
pub fn default_document() -> BoardDocument {
    let mut root = Entity::default();
    root.model.set("type", PropertyValue::text("board"));
    root.model.set("width", PropertyValue::Number(800.0));
    root.model.set("height", PropertyValue::Number(600.0));
    root.model.set("reportName", PropertyValue::text("New Board"));
    root.nature = vec![PropertyDescriptor::new(
        "reportName",
        PropertyType::String,
        "report name",
    )];
    BoardDocument {
        root,
        entities: Vec::new(),
    }
}

fn base_model(kind: &str, x: f64, y: f64, width: f64, height: f64) -> Model {
    let mut model = Model::new();
    model.set("type", PropertyValue::text(kind));
    model.set("x", PropertyValue::Number(x));
    model.set("y", PropertyValue::Number(y));
    model.set("width", PropertyValue::Number(width));
    model.set("height", PropertyValue::Number(height));
    model.set("hidden", PropertyValue::Bool(false));
    model.set("locked", PropertyValue::Bool(false));
    model
}

/// Sample rectangle component.
pub fn create_rect() -> Entity {
    Entity {
        model: base_model("rect", 40.0, 40.0, 120.0, 80.0),
        nature: vec![
            PropertyDescriptor::new("round", PropertyType::Number, "round"),
            PropertyDescriptor::new("rotation", PropertyType::Angle, "rotation"),
        ],
    }
}

/// Sample label component.
pub fn create_label() -> Entity {
    let mut entity = Entity {
        model: base_model("label", 60.0, 160.0, 160.0, 30.0),
        nature: vec![
            PropertyDescriptor::new("text", PropertyType::String, "text"),
            PropertyDescriptor::new("fontSize", PropertyType::Number, "font size"),
            PropertyDescriptor::new("bold", PropertyType::Checkbox, "bold"),
            PropertyDescriptor::new("fontColor", PropertyType::Color, "font color"),
        ],
    };
    entity.model.set("text", PropertyValue::text("Label"));
    entity
}

/// Sample gauge component; its nature exercises the color-stops and select
/// editors.
pub fn create_gauge() -> Entity {
    let mut value_ranges = PropertyDescriptor::new(
        "colorStops",
        PropertyType::SolidColorStops,
        "value ranges",
    );
    value_ranges.min = Some(0.0);
    value_ranges.max = Some(100.0);

    let mut unit = PropertyDescriptor::new("unit", PropertyType::Select, "unit");
    unit.options = vec![
        OptionSpec::Plain("%".to_string()),
        OptionSpec::Labelled {
            value: "c".to_string(),
            display: "°C".to_string(),
        },
    ];

    let mut entity = Entity {
        model: base_model("gauge", 240.0, 60.0, 180.0, 180.0),
        nature: vec![
            PropertyDescriptor::new("value", PropertyType::Number, "value"),
            PropertyDescriptor::new("min", PropertyType::Number, "min"),
            PropertyDescriptor::new("max", PropertyType::Number, "max"),
            value_ranges,
            unit,
            PropertyDescriptor::new("showValue", PropertyType::Checkbox, "show value"),
        ],
    };
    entity.model.set("value", PropertyValue::Number(30.0));
    entity.model.set("min", PropertyValue::Number(0.0));
    entity.model.set("max", PropertyValue::Number(100.0));
    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::{PropertyTarget, apply_patch, panel_source};

    fn board_with(entities: Vec<Entity>) -> DemoBoard {
        DemoBoard::from_document(BoardDocument {
            root: default_document().root,
            entities,
        })
    }

    #[test]
    fn undoable_change_groups_a_multi_entity_patch() {
        let mut board = board_with(vec![create_rect(), create_rect()]);
        board.select(vec![0, 1]);
        let source = panel_source(&board);
        assert_eq!(source.target, PropertyTarget::Multiple(vec![0, 1]));

        apply_patch(
            &mut board,
            &source.target,
            &PropertyPatch::single("hidden", PropertyValue::Bool(true)),
        );
        assert_eq!(board.entities()[0].model.boolean("hidden"), Some(true));
        assert_eq!(board.entities()[1].model.boolean("hidden"), Some(true));

        board.undo();
        assert_eq!(board.entities()[0].model.boolean("hidden"), Some(false));
        assert_eq!(board.entities()[1].model.boolean("hidden"), Some(false));

        board.redo();
        assert_eq!(board.entities()[1].model.boolean("hidden"), Some(true));
    }

    #[test]
    fn delete_and_undo_restore_order() {
        let mut board = board_with(vec![create_rect(), create_label(), create_gauge()]);
        board.delete(&[0, 2]);
        assert_eq!(board.entities().len(), 1);
        assert_eq!(board.entities()[0].type_name(), Some("label"));

        board.undo();
        assert_eq!(board.entities().len(), 3);
        assert_eq!(board.entities()[0].type_name(), Some("rect"));
        assert_eq!(board.entities()[2].type_name(), Some("gauge"));
    }

    #[test]
    fn align_left_moves_everything_to_the_min_x() {
        let mut board = board_with(vec![create_rect(), create_gauge()]);
        board.select(vec![0, 1]);
        board.align(AlignEdge::Left);
        assert_eq!(board.entities()[0].model.number("x"), Some(40.0));
        assert_eq!(board.entities()[1].model.number("x"), Some(40.0));

        board.undo();
        assert_eq!(board.entities()[1].model.number("x"), Some(240.0));
    }

    #[test]
    fn align_needs_at_least_two_entities() {
        let mut board = board_with(vec![create_rect()]);
        board.select(vec![0]);
        board.align(AlignEdge::Left);
        assert!(!board.can_undo());
    }

    #[test]
    fn zorder_front_moves_selection_to_the_end() {
        let mut board = board_with(vec![create_rect(), create_label(), create_gauge()]);
        board.select(vec![0]);
        board.reorder(ZOrderOp::Front);
        assert_eq!(board.entities()[2].type_name(), Some("rect"));

        board.undo();
        assert_eq!(board.entities()[0].type_name(), Some("rect"));
    }

    #[test]
    fn new_edits_clear_the_redo_stack() {
        let mut board = board_with(vec![create_rect()]);
        board.select(vec![0]);
        apply_patch(
            &mut board,
            &PropertyTarget::Single(0),
            &PropertyPatch::single("round", PropertyValue::Number(4.0)),
        );
        board.undo();
        assert!(board.can_redo());
        apply_patch(
            &mut board,
            &PropertyTarget::Single(0),
            &PropertyPatch::single("round", PropertyValue::Number(8.0)),
        );
        assert!(!board.can_redo());
    }

    #[test]
    fn document_round_trips_through_json() {
        let board = board_with(vec![create_rect(), create_gauge()]);
        let json = serde_json::to_string(&board.to_document()).unwrap();
        let back: BoardDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board.to_document());
    }
}
