use leptos::prelude::*;

use crate::sections::{
    Features, Footer, GettingStarted, Hero, Nav, StackSection, StructureSelector,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <Features />
            <GettingStarted />
            <StructureSelector />
            <StackSection />
        </main>
        <Footer />
    }
}
