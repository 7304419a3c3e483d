//! Food Form Modal Component
//!
//! Modal dialog for adding a menu item. Every interaction funnels through the
//! form state machine; this component renders the model and runs the commands
//! it returns.

use leptos::prelude::*;

use crate::components::LabeledInput;
use crate::context::AppContext;
use crate::form::{self, FormCommand, FormEvent, FormModel};
use crate::mutation::use_create_food;

/// Modal form for creating a new menu item
#[component]
pub fn FoodFormModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (model, set_model) = signal(FormModel::new());

    let mutation = use_create_food(Callback::new(move |result: Result<(), _>| {
        let event = match result {
            Ok(()) => FormEvent::SubmitSucceeded,
            Err(err) => FormEvent::SubmitFailed(err),
        };
        let mut command = FormCommand::None;
        set_model.try_update(|m| command = form::update(m, event));
        if command == FormCommand::CloseModal {
            ctx.close_modal();
        }
    }));

    let dispatch = move |event: FormEvent| {
        let mut command = FormCommand::None;
        set_model.update(|m| command = form::update(m, event));
        match command {
            FormCommand::None => {}
            FormCommand::Post(food) => mutation.mutate(food),
            FormCommand::CloseModal => ctx.close_modal(),
        }
    };

    view! {
        <div class="modal-overlay">
            <div class="modal-body">
                <h2>"Inclua um novo item no cardápio:"</h2>
                <form class="modal-input-container">
                    <LabeledInput
                        label="Título:"
                        value=Signal::derive(move || model.get().title)
                        on_change=move |value| dispatch(FormEvent::TitleEdited(value))
                    />
                    <LabeledInput
                        label="Preço:"
                        value=Signal::derive(move || model.get().price)
                        on_change=move |value| dispatch(FormEvent::PriceEdited(value))
                    />
                    <LabeledInput
                        label="Link da imagem:"
                        value=Signal::derive(move || model.get().image)
                        on_change=move |value| dispatch(FormEvent::ImageEdited(value))
                    />
                </form>
                {move || {
                    model
                        .with(|m| m.error_message().map(str::to_string))
                        .map(|message| view! { <p class="modal-error-message">{message}</p> })
                }}
                <div class="modal-button-group">
                    <button
                        class="modal-btn-insert"
                        on:click=move |_| dispatch(FormEvent::SubmitRequested)
                    >
                        {move || if mutation.pending.get() { "Inserindo..." } else { "Inserir" }}
                    </button>
                    <button
                        class="modal-btn-back"
                        on:click=move |_| dispatch(FormEvent::DismissRequested)
                    >
                        "Voltar"
                    </button>
                </div>
            </div>
        </div>
    }
}
