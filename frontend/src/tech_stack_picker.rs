use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::TechStack;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct TechStackPickerProps {
    pub stack: TechStack,
    pub on_change: Callback<TechStack>,
    #[prop_or_default]
    pub disabled: bool,
}

pub enum Msg {
    UpdateInput(String),
    Add(String),
    AddTyped,
    Remove(String),
}

/// Free-text tag input with suggestions from the known option list.
pub struct TechStackPicker {
    stack: TechStack,
    input_value: String,
}

impl Component for TechStackPicker {
    type Message = Msg;
    type Properties = TechStackPickerProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            stack: ctx.props().stack.clone(),
            input_value: String::new(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.stack = ctx.props().stack.clone();
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateInput(value) => {
                self.input_value = value;
                true
            }
            Msg::Add(tech) => {
                if self.stack.add(&tech) {
                    ctx.props().on_change.emit(self.stack.clone());
                }
                self.input_value.clear();
                true
            }
            Msg::AddTyped => {
                let typed = std::mem::take(&mut self.input_value);
                if self.stack.add(&typed) {
                    ctx.props().on_change.emit(self.stack.clone());
                }
                true
            }
            Msg::Remove(tech) => {
                self.stack.remove(&tech);
                ctx.props().on_change.emit(self.stack.clone());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let disabled = ctx.props().disabled;
        let suggestions = if self.input_value.trim().is_empty() {
            Vec::new()
        } else {
            self.stack.suggestions(&self.input_value)
        };

        html! {
            <div class={SPACE_Y_BASE}>
                <div class="relative">
                    <input
                        type="text"
                        value={self.input_value.clone()}
                        placeholder="Type to search, Enter to add"
                        class={INPUT_BASE}
                        {disabled}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let target = e.target_unchecked_into::<HtmlInputElement>();
                            Msg::UpdateInput(target.value())
                        })}
                        onkeypress={ctx.link().batch_callback(|e: KeyboardEvent| {
                            if e.key() == "Enter" {
                                e.prevent_default();
                                vec![Msg::AddTyped]
                            } else {
                                vec![]
                            }
                        })}
                    />
                    if !suggestions.is_empty() {
                        <ul class="absolute z-10 mt-1 w-full max-h-48 overflow-y-auto bg-gray-800 border border-gray-600 rounded-md shadow-lg">
                            {for suggestions.into_iter().map(|tech| html! {
                                <li
                                    class="px-4 py-2 text-gray-200 cursor-pointer hover:bg-gray-700"
                                    onclick={ctx.link().callback(move |_| Msg::Add(tech.to_string()))}
                                >
                                    {tech}
                                </li>
                            })}
                        </ul>
                    }
                </div>

                <div class="flex flex-wrap gap-2">
                    {for self.stack.selected().iter().map(|tech| {
                        let removed = tech.clone();
                        html! {
                            <span class={CHIP}>
                                {tech}
                                <button
                                    type="button"
                                    class="ml-2 text-blue-300 hover:text-white"
                                    {disabled}
                                    onclick={ctx.link().callback(move |_| Msg::Remove(removed.clone()))}
                                >
                                    {"×"}
                                </button>
                            </span>
                        }
                    })}
                </div>
            </div>
        }
    }
}
