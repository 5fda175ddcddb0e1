use {
    crate::{config::LOCATIONS, domain::Location, ui::UiText},
    itertools::Itertools,
};

pub fn render_cities(text: &UiText, selected: &Location) -> String {
    let rows = LOCATIONS.iter().map(|location| {
        let marker = if location == selected {
            format!("  ({})", text.label_selected)
        } else {
            String::new()
        };
        format!("  {:<12} {}{}", location.key, location.name_bn, marker)
    });
    std::iter::once(text.title_cities.clone()).chain(rows).join("\n")
}
