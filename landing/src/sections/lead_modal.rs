use leptos::prelude::*;
use pulse_core::{LeadCapture, LeadField, SERVICE_OPTIONS, WizardStep};
use tracing::warn;

use crate::dom;
use crate::sink::SiteSink;

const INPUT_CLASS: &str =
    "w-full px-4 py-2 border border-gray-300 rounded-md focus:ring-blue-500 focus:border-blue-500";

/// Label and input type for a contact field.
fn field_meta(field: LeadField) -> (&'static str, &'static str) {
    match field {
        LeadField::FirstName => ("First Name", "text"),
        LeadField::LastName => ("Last Name", "text"),
        LeadField::Email => ("Business Email", "email"),
        LeadField::Phone => ("Phone Number", "tel"),
        LeadField::Company => ("Company Name", "text"),
        LeadField::Website => ("Website", "url"),
        LeadField::Goals => ("What are your primary marketing goals or challenges?", "text"),
    }
}

fn field_label(field: LeadField) -> String {
    let (label, _) = field_meta(field);
    if field.is_required() {
        format!("{label} *")
    } else {
        label.to_string()
    }
}

/// The proposal wizard overlay.
///
/// The page body does not scroll while the overlay is open. Closing it by
/// any control discards the lead in progress.
#[component]
pub fn LeadCaptureModal(capture: RwSignal<LeadCapture>, sink: SiteSink) -> impl IntoView {
    let sink = StoredValue::new(sink);
    let is_open = Memo::new(move |_| capture.with(LeadCapture::is_open));
    let completed = Memo::new(move |_| capture.with(|c| c.wizard().is_completed()));

    Effect::new(move |_| dom::lock_body_scroll(is_open.get()));
    on_cleanup(|| dom::lock_body_scroll(false));

    let close = move || capture.update(LeadCapture::close);

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 bg-black bg-opacity-50 z-50 flex items-center justify-center p-4">
                <div class="bg-white rounded-xl max-w-xl w-full max-h-[90vh] overflow-y-auto">
                    <div class="p-6 relative">
                        <button
                            class="absolute top-4 right-4 text-gray-500 hover:text-gray-700 transition-colors text-xl"
                            aria-label="Close"
                            on:click=move |_| close()
                        >
                            "✕"
                        </button>

                        <div class="text-center mb-8">
                            <h2 class="text-2xl font-bold text-gray-900">"Get Your Free Marketing Proposal"</h2>
                            <p class="text-gray-600 mt-2">
                                "Tell us about your business and goals, and we'll create a custom proposal tailored to your needs."
                            </p>
                        </div>

                        <Show
                            when=move || !completed.get()
                            fallback=move || view! { <ThankYou on_close=Callback::new(move |()| close()) /> }
                        >
                            <WizardForm capture=capture sink=sink />
                        </Show>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn WizardForm(capture: RwSignal<LeadCapture>, sink: StoredValue<SiteSink>) -> impl IntoView {
    let step = Memo::new(move |_| capture.with(|c| c.wizard().step()));
    let can_continue = Memo::new(move |_| capture.with(|c| c.wizard().can_continue()));
    let progress = Memo::new(move |_| capture.with(|c| c.wizard().progress_percent()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        capture.update(|c| {
            let result = sink.with_value(|s| c.submit(s));
            if let Err(err) = result {
                warn!(error = %err, "lead not submitted");
            }
        });
    };

    view! {
        <StepIndicator step=step progress=progress />

        <form on:submit=on_submit>
            {move || match step.get() {
                WizardStep::BasicInfo => view! { <ContactStep capture=capture /> }.into_any(),
                WizardStep::Services => view! { <ServicesStep capture=capture /> }.into_any(),
                WizardStep::Goals => view! { <GoalsStep capture=capture /> }.into_any(),
            }}

            <div class="mt-8 flex justify-between">
                <Show when=move || !step.get().is_first()>
                    <button
                        type="button"
                        class="bg-gray-200 hover:bg-gray-300 text-gray-800 px-5 py-2 rounded-md font-medium transition-colors"
                        on:click=move |_| capture.update(|c| c.wizard_mut().prev_step())
                    >
                        "Back"
                    </button>
                </Show>

                <Show
                    when=move || !step.get().is_last()
                    fallback=|| view! {
                        <button
                            type="submit"
                            class="ml-auto bg-blue-600 hover:bg-blue-700 text-white px-5 py-2 rounded-md font-medium transition-colors"
                        >
                            "Submit"
                        </button>
                    }
                >
                    <button
                        type="button"
                        class=move || if can_continue.get() {
                            "ml-auto bg-blue-600 text-white px-5 py-2 rounded-md font-medium transition-colors hover:bg-blue-700"
                        } else {
                            "ml-auto bg-blue-600 text-white px-5 py-2 rounded-md font-medium transition-colors opacity-50 cursor-not-allowed"
                        }
                        disabled=move || !can_continue.get()
                        on:click=move |_| capture.update(|c| {
                            if c.wizard().can_continue() {
                                c.wizard_mut().next_step();
                            }
                        })
                    >
                        "Continue"
                    </button>
                </Show>
            </div>
        </form>
    }
}

#[component]
fn StepIndicator(step: Memo<WizardStep>, progress: Memo<f64>) -> impl IntoView {
    view! {
        <div class="mb-6">
            <div class="flex items-center justify-between">
                {WizardStep::ALL.into_iter().map(|item| view! {
                    <div class="flex flex-col items-center">
                        <div class={move || if step.get().number() >= item.number() {
                            "w-8 h-8 rounded-full flex items-center justify-center bg-blue-600 text-white"
                        } else {
                            "w-8 h-8 rounded-full flex items-center justify-center bg-gray-200 text-gray-600"
                        }}>
                            {item.number()}
                        </div>
                        <div class="text-xs mt-1 text-gray-500">{item.label()}</div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
            <div class="mt-2 h-2 bg-gray-200 rounded-full overflow-hidden">
                <div
                    class="h-full bg-blue-600 transition-all duration-300"
                    style=move || format!("width: {}%", progress.get())
                ></div>
            </div>
        </div>
    }
}

#[component]
fn ContactStep(capture: RwSignal<LeadCapture>) -> impl IntoView {
    let input = move |field: LeadField| {
        let (_, input_type) = field_meta(field);
        let key = field.as_key();
        view! {
            <div>
                <label for=key class="block text-sm font-medium text-gray-700 mb-1">{field_label(field)}</label>
                <input
                    type=input_type
                    id=key
                    name=key
                    required=field.is_required()
                    class=INPUT_CLASS
                    prop:value=move || capture.with(|c| c.wizard().form().field(field).to_string())
                    on:input=move |ev| capture.update(|c| c.wizard_mut().set_field(field, event_target_value(&ev)))
                />
            </div>
        }
    };

    let [first, last, rest @ ..] = LeadField::CONTACT;

    view! {
        <div class="space-y-4">
            <div class="grid grid-cols-2 gap-4">
                {input(first)}
                {input(last)}
            </div>
            {rest.into_iter().map(input).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn ServicesStep(capture: RwSignal<LeadCapture>) -> impl IntoView {
    view! {
        <div>
            <p class="text-gray-700 mb-4">
                "Which digital marketing services are you interested in? (Select all that apply)"
            </p>
            <div class="space-y-3">
                {SERVICE_OPTIONS.iter().map(|service| {
                    let id = service.id;
                    view! {
                        <div class="flex items-center">
                            <input
                                type="checkbox"
                                id=id
                                class="h-5 w-5 text-blue-600 border-gray-300 rounded focus:ring-blue-500"
                                prop:checked=move || capture.with(|c| c.wizard().form().has_service(id))
                                on:change=move |_| capture.update(|c| {
                                    c.wizard_mut().toggle_service(id);
                                })
                            />
                            <label for=id class="ml-3 text-gray-700">{service.label}</label>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn GoalsStep(capture: RwSignal<LeadCapture>) -> impl IntoView {
    let key = LeadField::Goals.as_key();
    view! {
        <div>
            <label for=key class="block text-sm font-medium text-gray-700 mb-1">
                {field_label(LeadField::Goals)}
            </label>
            <textarea
                id=key
                name=key
                rows="5"
                class=INPUT_CLASS
                placeholder="E.g., increasing website traffic, generating more leads, improving conversion rates, etc."
                prop:value=move || capture.with(|c| c.wizard().form().goals.clone())
                on:input=move |ev| capture.update(|c| c.wizard_mut().set_field(LeadField::Goals, event_target_value(&ev)))
            ></textarea>
        </div>
    }
}

#[component]
fn ThankYou(on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="text-center py-8">
            <div class="inline-flex items-center justify-center w-16 h-16 rounded-full bg-green-100 text-green-600 mb-6 text-3xl">
                "✓"
            </div>
            <h3 class="text-xl font-bold text-gray-900 mb-2">"Thank You!"</h3>
            <p class="text-gray-600 mb-6">
                "We've received your information and will create your custom marketing proposal. A member of our team will contact you within 24 hours."
            </p>
            <button
                class="bg-blue-600 hover:bg-blue-700 text-white px-6 py-3 rounded-md font-medium transition-colors"
                on:click=move |_| on_close.run(())
            >
                "Close"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_are_starred() {
        assert_eq!(field_label(LeadField::Email), "Business Email *");
        assert_eq!(field_label(LeadField::Phone), "Phone Number");
    }

    #[test]
    fn contact_fields_use_matching_input_types() {
        let types: Vec<_> = LeadField::CONTACT
            .into_iter()
            .map(|f| field_meta(f).1)
            .collect();
        assert_eq!(types, ["text", "text", "email", "tel", "text", "url"]);
    }
}
