use handlebars::{Handlebars, TemplateError};

/// Builds the registry with every page and fragment template compiled in.
pub fn registry() -> Result<Handlebars<'static>, TemplateError> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_template_string("template", include_str!("templates/template.hbs"))?;
    handlebars.register_template_string("index", include_str!("templates/index.hbs"))?;
    handlebars.register_template_string("github/loading", include_str!("templates/github/loading.hbs"))?;
    handlebars.register_template_string("github/error", include_str!("templates/github/error.hbs"))?;
    handlebars.register_template_string("github/ready", include_str!("templates/github/ready.hbs"))?;
    handlebars.register_template_string("projects/modal", include_str!("templates/projects/modal.hbs"))?;
    handlebars.register_template_string("errors/404", include_str!("templates/errors/404.hbs"))?;
    handlebars.register_template_string("errors/500", include_str!("templates/errors/500.hbs"))?;
    Ok(handlebars)
}
