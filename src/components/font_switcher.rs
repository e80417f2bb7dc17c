use yew::prelude::*;

use crate::fonts::FontPreset;

#[derive(Properties, PartialEq)]
pub struct FontSwitcherProps {
    pub current: FontPreset,
    pub on_change: Callback<FontPreset>,
}

#[function_component(FontSwitcher)]
pub fn font_switcher(props: &FontSwitcherProps) -> Html {
    html! {
        <div class="font-switcher" style="position: fixed; top: 1rem; left: 1rem; z-index: 50; background: rgba(255, 255, 255, 0.9); backdrop-filter: blur(4px); border-radius: 0.5rem; padding: 0.75rem; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);">
            <div style="font-size: 0.875rem; font-weight: 600; color: #374151; margin-bottom: 0.5rem;">
                {"Font Preset:"}
            </div>
            <div style="display: flex; flex-direction: column; gap: 0.25rem;">
                { for FontPreset::ALL.iter().map(|&preset| {
                    let onchange = {
                        let on_change = props.on_change.clone();
                        Callback::from(move |_: Event| on_change.emit(preset))
                    };
                    html! {
                        <label style="display: flex; align-items: center; gap: 0.5rem; cursor: pointer;">
                            <input
                                type="radio"
                                name="fontPreset"
                                value={preset.value()}
                                checked={props.current == preset}
                                {onchange}
                            />
                            <span style="font-size: 0.875rem; color: #374151;">{preset.label()}</span>
                        </label>
                    }
                }) }
            </div>
        </div>
    }
}
