//! Mapping editor: accessor, target, property, rule type, and the per-rule
//! parameter editor.
//!
//! The edited mapping lives in a local draft until it is complete enough to
//! reach the model, and each rule keeps its last parameter while the user
//! flips between rule types, so switching back restores the previous
//! map/range/eval untouched.

use board_core::binding::normalize_target;
use board_core::{
    CellKind, KeyKind, Mapping, MappingRule, ValueMap, ValueRange, value_kind_for,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::value_map::ValueMapEditor;
use super::value_range::ValueRangeEditor;
use crate::components::editors::CodeEditor;

/// Props for the MapperEditor component.
#[derive(Properties, PartialEq)]
pub struct MapperEditorProps {
    #[prop_or_default]
    pub mapping: Mapping,
    /// `(name, label)` pairs offered by the property select.
    pub properties: Vec<(&'static str, &'static str)>,
    pub on_change: Callback<Mapping>,
}

#[function_component(MapperEditor)]
pub fn mapper_editor(props: &MapperEditorProps) -> Html {
    // the mapping under edit; incomplete states never reach the model, so
    // they live here
    let draft = use_state(|| props.mapping.clone());
    // per-rule parameter memory, seeded from the incoming mapping
    let map_cache = use_state(ValueMap::default);
    let range_cache = use_state(ValueRange::default);
    let eval_cache = use_state(String::new);
    let last_emitted = use_mut_ref(|| None::<Mapping>);

    {
        let draft = draft.clone();
        let map_cache = map_cache.clone();
        let range_cache = range_cache.clone();
        let eval_cache = eval_cache.clone();
        let last_emitted = last_emitted.clone();
        use_effect_with(props.mapping.clone(), move |mapping| {
            // an arrival matching our own commit is an echo, not an external
            // replacement
            if last_emitted.borrow_mut().take().as_ref() == Some(mapping) {
                return;
            }
            draft.set(mapping.clone());
            let param = mapping.param.clone();
            match mapping.rule {
                MappingRule::Map => {
                    map_cache.set(
                        param
                            .and_then(|p| serde_json::from_value(p).ok())
                            .unwrap_or_default(),
                    );
                    range_cache.set(ValueRange::default());
                    eval_cache.set(String::new());
                }
                MappingRule::Range => {
                    range_cache.set(
                        param
                            .and_then(|p| serde_json::from_value(p).ok())
                            .unwrap_or_default(),
                    );
                    map_cache.set(ValueMap::default());
                    eval_cache.set(String::new());
                }
                MappingRule::Eval => {
                    eval_cache.set(
                        param
                            .and_then(|p| p.as_str().map(ToString::to_string))
                            .unwrap_or_default(),
                    );
                    map_cache.set(ValueMap::default());
                    range_cache.set(ValueRange::default());
                }
                MappingRule::Value => {}
            }
        });
    }

    let emit = {
        let draft = draft.clone();
        let on_change = props.on_change.clone();
        let last_emitted = last_emitted.clone();
        move |mapping: Mapping| {
            *last_emitted.borrow_mut() = Some(mapping.clone());
            draft.set(mapping.clone());
            on_change.emit(mapping);
        }
    };

    let on_accessor_change = {
        let draft = draft.clone();
        let emit = emit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            emit(Mapping {
                accessor: input.value().trim().to_string(),
                ..(*draft).clone()
            });
        })
    };

    let on_target_change = {
        let draft = draft.clone();
        let emit = emit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let target = normalize_target(&input.value());
            input.set_value(&target);
            emit(Mapping {
                target,
                ..(*draft).clone()
            });
        })
    };

    let on_property_change = {
        let draft = draft.clone();
        let emit = emit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            emit(Mapping {
                property: select.value().trim().to_string(),
                ..(*draft).clone()
            });
        })
    };

    // click, not a selection-change listener: writing the selected rule back
    // into the group from this handler would cycle
    let rule_radios = MappingRule::ALL.iter().map(|rule| {
        let checked = draft.rule == *rule;
        let on_click = {
            let draft = draft.clone();
            let map_cache = map_cache.clone();
            let range_cache = range_cache.clone();
            let eval_cache = eval_cache.clone();
            let emit = emit.clone();
            let rule = *rule;
            Callback::from(move |_: Event| {
                let param = match rule {
                    MappingRule::Map => serde_json::to_value(&*map_cache).ok(),
                    MappingRule::Range => serde_json::to_value(&*range_cache).ok(),
                    MappingRule::Eval => Some(serde_json::Value::String((*eval_cache).clone())),
                    MappingRule::Value => None,
                };
                emit(Mapping {
                    rule,
                    param,
                    ..(*draft).clone()
                });
            })
        };
        html! {
            <label class="rule-radio" key={rule.label()}>
                <input type="radio" name="mapping-rule" checked={checked} onchange={on_click} />
                {rule.label()}
            </label>
        }
    });

    let kind = value_kind_for(&draft.property);

    let key_kind = if kind == CellKind::Number {
        KeyKind::Number
    } else {
        KeyKind::Text
    };

    let param_editor = match draft.rule {
        MappingRule::Value => html! {},
        MappingRule::Map => {
            let on_map_change = {
                let draft = draft.clone();
                let map_cache = map_cache.clone();
                let emit = emit.clone();
                Callback::from(move |map: ValueMap| {
                    let param = serde_json::to_value(&map).ok();
                    map_cache.set(map);
                    emit(Mapping {
                        param,
                        ..(*draft).clone()
                    });
                })
            };
            html! {
                <ValueMapEditor
                    value={(*map_cache).clone()}
                    kind={kind}
                    key_kind={key_kind}
                    on_change={on_map_change}
                />
            }
        }
        MappingRule::Range => {
            let on_range_change = {
                let draft = draft.clone();
                let range_cache = range_cache.clone();
                let emit = emit.clone();
                Callback::from(move |range: ValueRange| {
                    let param = serde_json::to_value(&range).ok();
                    range_cache.set(range);
                    emit(Mapping {
                        param,
                        ..(*draft).clone()
                    });
                })
            };
            html! {
                <ValueRangeEditor
                    value={(*range_cache).clone()}
                    kind={kind}
                    key_kind={key_kind}
                    on_change={on_range_change}
                />
            }
        }
        MappingRule::Eval => {
            let on_eval_change = {
                let draft = draft.clone();
                let eval_cache = eval_cache.clone();
                let emit = emit.clone();
                Callback::from(move |code: String| {
                    eval_cache.set(code.clone());
                    emit(Mapping {
                        param: Some(serde_json::Value::String(code)),
                        ..(*draft).clone()
                    });
                })
            };
            html! {
                <CodeEditor
                    value={(*eval_cache).clone()}
                    placeholder="return"
                    on_change={on_eval_change}
                />
            }
        }
    };

    html! {
        <div class="mapper-editor">
            <label>{"accessor"}</label>
            <input type="text" value={draft.accessor.clone()} onchange={on_accessor_change} />

            <label>{"target"}</label>
            <input
                type="text"
                value={draft.target.clone()}
                placeholder="(self)"
                onchange={on_target_change}
            />

            <label>{"property"}</label>
            <select onchange={on_property_change}>
                {for props.properties.iter().map(|(name, label)| html! {
                    <option value={*name} selected={draft.property == *name}>{*label}</option>
                })}
            </select>

            <label>{"rule type"}</label>
            <div class="rule-radios">{for rule_radios}</div>

            {param_editor}
        </div>
    }
}
