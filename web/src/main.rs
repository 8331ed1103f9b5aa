// Medical portal - browser entry point (Leptos 0.8 CSR, built with trunk)

use leptos::prelude::*;
use medical_portal::app::AppShell;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <AppShell /> });
}
