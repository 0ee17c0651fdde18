use crate::constants::{
    ACTIVE, DATA_LINE, DATA_STREAM_ID, PARTICLE, PARTICLES_ID, REDUCED_MOTION_QUERY,
};
use crate::dom::{self, Page};
use crate::error::WireError;
use site_core::constants::{DATA_LINE_COUNT, PARTICLE_COUNT};
use site_core::decor::{data_stream, particle_field};
use web_sys as web;

fn reduced_motion(page: &Page) -> bool {
    let reduced = dom::media_matches(&page.window, REDUCED_MOTION_QUERY);
    if reduced {
        log::debug!("[decor] reduced motion requested; skipping");
    }
    reduced
}

fn styled_div(
    document: &web::Document,
    class: &str,
    declarations: &[(&'static str, String)],
) -> Result<web::Element, WireError> {
    let el = document.create_element("div")?;
    el.class_list().add_1(class)?;
    for (property, value) in declarations {
        dom::set_style(&el, property, value);
    }
    Ok(el)
}

/// Floating particles, switched on one after another.
pub fn wire_particles(page: &Page) -> Result<(), WireError> {
    let container = page.element(PARTICLES_ID)?;
    if reduced_motion(page) {
        return Ok(());
    }
    let field = particle_field(&mut rand::thread_rng(), PARTICLE_COUNT);
    for style in &field {
        let particle = styled_div(&page.document, PARTICLE, &style.declarations())?;
        container.append_child(&particle)?;
        dom::set_timeout(style.activate_after, move || {
            _ = particle.class_list().add_1(ACTIVE);
        })?;
    }
    Ok(())
}

pub fn wire_data_stream(page: &Page) -> Result<(), WireError> {
    let container = page.element(DATA_STREAM_ID)?;
    if reduced_motion(page) {
        return Ok(());
    }
    for style in data_stream(&mut rand::thread_rng(), DATA_LINE_COUNT) {
        let line = styled_div(&page.document, DATA_LINE, &style.declarations())?;
        container.append_child(&line)?;
    }
    Ok(())
}
