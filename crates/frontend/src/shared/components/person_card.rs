use super::InlineText;
use contracts::poster::Person;
use leptos::prelude::*;

#[component]
pub fn PersonCard(person: Person) -> impl IntoView {
    view! {
        <section class="section person">
            <h3 class="h3">{person.name}</h3>
            <p class="para person__role">
                {person.affiliation}
                <br />
                {person.program}
            </p>
            <p class="para person__contact">
                {format!("Email: {} | ", person.email)}
                <InlineText inlines=person.links />
            </p>
        </section>
    }
}
