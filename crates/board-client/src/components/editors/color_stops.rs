//! Color-stops editor: a preview bar with draggable markers plus side
//! editors for the focused stop's color and position.
//!
//! Double-click on the bar background inserts a stop. Dragging a marker
//! horizontally moves it (recomputations throttled); releasing a drag far
//! below the bar removes the stop. All list/focus bookkeeping lives in the
//! core `StopPicker`; this component only wires pointer events to it.

use std::cell::RefCell;
use std::rc::Rc;

use board_core::coerce::number_or_zero;
use board_core::{ColorStop, StopBarMode, StopPicker};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

use super::color::ColorEditor;

/// Minimum time between drag recomputations.
const DRAG_THROTTLE_MILLIS: f64 = 100.0;

struct DragContext {
    start_x: f64,
    start_y: f64,
    last_recompute: f64,
}

/// Props for the ColorStopsEditor component.
#[derive(Properties, PartialEq)]
pub struct ColorStopsEditorProps {
    #[prop_or_default]
    pub mode: StopBarMode,
    #[prop_or_default]
    pub value: Vec<ColorStop>,
    #[prop_or(0.0)]
    pub min: f64,
    #[prop_or(1.0)]
    pub max: f64,
    pub on_change: Callback<Vec<ColorStop>>,
}

#[function_component(ColorStopsEditor)]
pub fn color_stops_editor(props: &ColorStopsEditorProps) -> Html {
    let picker = use_state(|| {
        let mut picker = StopPicker::new(props.min, props.max);
        picker.replace_stops(props.value.clone());
        picker
    });
    let bar_ref = use_node_ref();
    let bar_width = use_state(|| 0.0_f64);
    let drag: Rc<RefCell<Option<DragContext>>> = use_mut_ref(|| None);
    // remembers our own last emit, so its round trip through the parent does
    // not clear the focus the user is working with
    let last_emitted = use_mut_ref(|| None::<Vec<ColorStop>>);

    {
        let picker = picker.clone();
        let last_emitted = last_emitted.clone();
        use_effect_with(
            (props.value.clone(), props.min, props.max),
            move |(value, min, max)| {
                if last_emitted.borrow_mut().take().as_ref() == Some(value) {
                    if picker.min() != *min || picker.max() != *max {
                        let mut next = (*picker).clone();
                        next.set_range(*min, *max);
                        picker.set(next);
                    }
                } else {
                    let mut next = StopPicker::new(*min, *max);
                    next.replace_stops(value.clone());
                    picker.set(next);
                }
            },
        );
    }

    // the bar width is only known once the node is laid out
    {
        let bar_ref = bar_ref.clone();
        let bar_width = bar_width.clone();
        use_effect(move || {
            if let Some(bar) = bar_ref.cast::<HtmlElement>() {
                let width = f64::from(bar.offset_width());
                if (width - *bar_width).abs() > 0.5 {
                    bar_width.set(width);
                }
            }
        });
    }

    let emit = {
        let on_change = props.on_change.clone();
        let last_emitted = last_emitted.clone();
        move |next: &StopPicker| {
            let stops = next.stops().to_vec();
            *last_emitted.borrow_mut() = Some(stops.clone());
            on_change.emit(stops);
        }
    };

    let on_bar_dblclick = {
        let picker = picker.clone();
        let bar_ref = bar_ref.clone();
        let emit = emit.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(bar) = bar_ref.cast::<HtmlElement>() else {
                return;
            };
            // marker double-clicks are filtered out by the markers' own
            // handler; this only sees the bar background
            let width = f64::from(bar.offset_width());
            if width <= 0.0 {
                return;
            }
            let ratio = f64::from(e.offset_x()) / width;
            let mut next = (*picker).clone();
            next.insert_at_ratio(ratio);
            emit(&next);
            picker.set(next);
        })
    };

    let on_marker_pointerdown = {
        let picker = picker.clone();
        let drag = drag.clone();
        move |index: usize| {
            let picker = picker.clone();
            let drag = drag.clone();
            Callback::from(move |e: PointerEvent| {
                e.stop_propagation();
                if let Some(target) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                {
                    let _ = target.set_pointer_capture(e.pointer_id());
                }
                let mut next = (*picker).clone();
                next.select(index);
                next.begin_drag();
                *drag.borrow_mut() = Some(DragContext {
                    start_x: f64::from(e.client_x()),
                    start_y: f64::from(e.client_y()),
                    last_recompute: 0.0,
                });
                picker.set(next);
            })
        }
    };

    let on_pointermove = {
        let picker = picker.clone();
        let drag = drag.clone();
        let bar_width = bar_width.clone();
        let emit = emit.clone();
        Callback::from(move |e: PointerEvent| {
            let mut drag_ref = drag.borrow_mut();
            let Some(context) = drag_ref.as_mut() else {
                return;
            };
            // dragging floods pointer events; recomputing every one of them
            // is wasted layout work
            let now = js_sys::Date::now();
            if now - context.last_recompute < DRAG_THROTTLE_MILLIS {
                return;
            }
            context.last_recompute = now;
            let delta_x = f64::from(e.client_x()) - context.start_x;
            drop(drag_ref);

            let mut next = (*picker).clone();
            if next.drag_by(delta_x, *bar_width) {
                emit(&next);
                picker.set(next);
            }
        })
    };

    let on_pointerup = {
        let picker = picker.clone();
        let drag = drag.clone();
        let emit = emit.clone();
        Callback::from(move |e: PointerEvent| {
            let Some(context) = drag.borrow_mut().take() else {
                return;
            };
            let delta_y = f64::from(e.client_y()) - context.start_y;
            let mut next = (*picker).clone();
            if next.end_drag(delta_y) {
                emit(&next);
            }
            picker.set(next);
        })
    };

    let on_focused_color = {
        let picker = picker.clone();
        let emit = emit.clone();
        Callback::from(move |color: String| {
            let mut next = (*picker).clone();
            if next.set_focused_color(color) {
                emit(&next);
                picker.set(next);
            }
        })
    };

    let on_focused_position = {
        let picker = picker.clone();
        let emit = emit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let position = number_or_zero(&input.value());
            let mut next = (*picker).clone();
            if next.set_focused_position(position) {
                emit(&next);
                picker.set(next);
            }
        })
    };

    let focused = picker.focused();
    let markers = picker.stops().iter().enumerate().map(|(index, stop)| {
        let offset = picker.marker_offset(stop.position, *bar_width);
        let is_focused = focused.is_some_and(|f| f.index == index);
        html! {
            <div
                key={index}
                class={classes!("stop-marker", is_focused.then_some("focused"))}
                style={format!("background-color:{};margin-left:{offset}px;", stop.color)}
                onpointerdown={on_marker_pointerdown(index)}
                ondblclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            ></div>
        }
    });

    html! {
        <div class="color-stops">
            <div
                class="colorbar"
                ref={bar_ref}
                style={format!("background:{};", picker.css_background(props.mode))}
                ondblclick={on_bar_dblclick}
            >
                <div
                    class="stop-markers"
                    onpointermove={on_pointermove}
                    onpointerup={on_pointerup}
                    ondblclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    {for markers}
                </div>
            </div>

            <ColorEditor
                value={focused.map(|f| f.color.clone()).unwrap_or_default()}
                on_change={on_focused_color}
            />
            <input
                type="number"
                class="stop-position"
                step="0.01"
                value={focused.map(|f| f.position.to_string()).unwrap_or_default()}
                onchange={on_focused_position}
            />
        </div>
    }
}
