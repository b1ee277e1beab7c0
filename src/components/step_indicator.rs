use leptos::prelude::*;

use crate::booking::WizardStep;

/// Numbered progress header for the booking wizard.
#[component]
pub fn StepIndicator(#[prop(into)] current: Signal<WizardStep>) -> impl IntoView {
    view! {
        <ol class="step-indicator">
            {WizardStep::ALL
                .iter()
                .map(|&step| {
                    view! {
                        <li
                            class="step-indicator-item"
                            class:active=move || { current.get() == step }
                            class:completed=move || { current.get() > step }
                        >
                            <span class="step-number">{step.number()}</span>
                            <span class="step-title">{step.title()}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ol>
    }
}
