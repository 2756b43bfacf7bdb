use handlebars::Handlebars;
use std::sync::Arc;

pub type Hbs = Arc<Handlebars<'static>>;

pub fn build_handlebars() -> Hbs {
    let mut hb = Handlebars::new();
    hb.set_strict_mode(false);

    // Layout
    hb.register_template_string("layouts/base", include_str!("../../templates/layouts/base.hbs"))
        .expect("template layouts/base");

    // Partial endpoints
    hb.register_template_string(
        "partials/alerts_list",
        include_str!("../../templates/partials/alerts_list.hbs"),
    )
    .expect("template partials/alerts_list");

    Arc::new(hb)
}
