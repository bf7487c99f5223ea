//! Board state management hook.
//!
//! A reducer holds the demo board (the stand-in for the external scene
//! engine) and every board mutation flows through one action enum. The board
//! document persists to localStorage so an editing session survives reloads.

use std::rc::Rc;

use board_core::{
    Entity, EntityId, PanelSource, PropertyPatch, Scene, apply_patch, panel_source,
};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::board::{AlignEdge, BoardDocument, DemoBoard, ZOrderOp, default_document};

const STORAGE_KEY: &str = "board-modeller-document";

/// Flash flags on mapping targets clear after this long.
const FLASH_MILLIS: u32 = 1500;

#[derive(Clone, PartialEq)]
struct BoardState {
    board: DemoBoard,
    flagged: Vec<EntityId>,
}

enum BoardAction {
    Select(Vec<EntityId>),
    ToggleSelect(EntityId),
    /// One committed property patch, applied to the current selection's
    /// pinned target as a single undoable transaction.
    Apply(PropertyPatch),
    Undo,
    Redo,
    Add(Entity),
    Delete(Vec<EntityId>),
    Align(AlignEdge),
    ZOrder(ZOrderOp),
    Load(BoardDocument),
    New,
    /// Flag the entities a mapping target selector matches.
    Flash(String),
    ClearFlash,
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut board = self.board.clone();
        let mut flagged = self.flagged.clone();
        match action {
            BoardAction::Select(selection) => board.select(selection),
            BoardAction::ToggleSelect(id) => board.toggle_select(id),
            BoardAction::Apply(patch) => {
                let target = panel_source(&board).target;
                apply_patch(&mut board, &target, &patch);
            }
            BoardAction::Undo => board.undo(),
            BoardAction::Redo => board.redo(),
            BoardAction::Add(entity) => board.add_entity(entity),
            BoardAction::Delete(ids) => board.delete(&ids),
            BoardAction::Align(edge) => board.align(edge),
            BoardAction::ZOrder(op) => board.reorder(op),
            BoardAction::Load(document) => {
                board = DemoBoard::from_document(document);
                flagged.clear();
            }
            BoardAction::New => {
                board = DemoBoard::from_document(default_document());
                flagged.clear();
            }
            BoardAction::Flash(selector) => {
                flagged = board.find_all(&selector, board.selection().first().copied());
            }
            BoardAction::ClearFlash => flagged.clear(),
        }
        Rc::new(Self { board, flagged })
    }
}

/// Everything the component tree needs from the board state.
#[derive(Clone)]
pub struct BoardStateHandle {
    pub board: DemoBoard,
    pub source: PanelSource,
    pub flagged: Vec<EntityId>,
    pub can_undo: bool,
    pub can_redo: bool,
    pub on_select: Callback<Vec<EntityId>>,
    pub on_toggle_select: Callback<EntityId>,
    pub on_apply: Callback<PropertyPatch>,
    pub on_undo: Callback<()>,
    pub on_redo: Callback<()>,
    pub on_add: Callback<Entity>,
    pub on_delete: Callback<Vec<EntityId>>,
    pub on_align: Callback<AlignEdge>,
    pub on_zorder: Callback<ZOrderOp>,
    pub on_load: Callback<BoardDocument>,
    pub on_new: Callback<()>,
    pub on_flash: Callback<String>,
}

impl PartialEq for BoardStateHandle {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board && self.flagged == other.flagged
    }
}

/// Hook wiring the board reducer, localStorage persistence, and the flash
/// timer.
#[hook]
pub fn use_board_state() -> BoardStateHandle {
    let state = use_reducer(|| {
        let restored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|json| serde_json::from_str::<BoardDocument>(&json).ok());
        BoardState {
            board: restored.map_or_else(DemoBoard::new, DemoBoard::from_document),
            flagged: Vec::new(),
        }
    });

    // persist the document whenever it changes
    {
        let document_json =
            serde_json::to_string(&state.board.to_document()).unwrap_or_default();
        use_effect_with(document_json, move |json| {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(STORAGE_KEY, json);
            }
        });
    }

    // flash flags clear themselves
    {
        let state = state.clone();
        let flagged = state.flagged.clone();
        use_effect_with(flagged, move |flagged| {
            let timeout = if flagged.is_empty() {
                None
            } else {
                let state = state.clone();
                Some(Timeout::new(FLASH_MILLIS, move || {
                    state.dispatch(BoardAction::ClearFlash);
                }))
            };
            move || drop(timeout)
        });
    }

    let on_select = {
        let state = state.clone();
        Callback::from(move |selection: Vec<EntityId>| {
            state.dispatch(BoardAction::Select(selection));
        })
    };

    let on_toggle_select = {
        let state = state.clone();
        Callback::from(move |id: EntityId| {
            state.dispatch(BoardAction::ToggleSelect(id));
        })
    };

    let on_apply = {
        let state = state.clone();
        Callback::from(move |patch: PropertyPatch| {
            state.dispatch(BoardAction::Apply(patch));
        })
    };

    let on_undo = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            state.dispatch(BoardAction::Undo);
        })
    };

    let on_redo = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            state.dispatch(BoardAction::Redo);
        })
    };

    let on_add = {
        let state = state.clone();
        Callback::from(move |entity: Entity| {
            state.dispatch(BoardAction::Add(entity));
        })
    };

    let on_delete = {
        let state = state.clone();
        Callback::from(move |ids: Vec<EntityId>| {
            state.dispatch(BoardAction::Delete(ids));
        })
    };

    let on_align = {
        let state = state.clone();
        Callback::from(move |edge: AlignEdge| {
            state.dispatch(BoardAction::Align(edge));
        })
    };

    let on_zorder = {
        let state = state.clone();
        Callback::from(move |op: ZOrderOp| {
            state.dispatch(BoardAction::ZOrder(op));
        })
    };

    let on_load = {
        let state = state.clone();
        Callback::from(move |document: BoardDocument| {
            state.dispatch(BoardAction::Load(document));
        })
    };

    let on_new = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            state.dispatch(BoardAction::New);
        })
    };

    let on_flash = {
        let state = state.clone();
        Callback::from(move |selector: String| {
            if !selector.is_empty() {
                state.dispatch(BoardAction::Flash(selector));
            }
        })
    };

    BoardStateHandle {
        board: state.board.clone(),
        source: panel_source(&state.board),
        flagged: state.flagged.clone(),
        can_undo: state.board.can_undo(),
        can_redo: state.board.can_redo(),
        on_select,
        on_toggle_select,
        on_apply,
        on_undo,
        on_redo,
        on_add,
        on_delete,
        on_align,
        on_zorder,
        on_load,
        on_new,
        on_flash,
    }
}
