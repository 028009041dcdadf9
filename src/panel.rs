use crate::core::{FieldKind, ParamError, ParamField, ParamGroup, ParamValue, Params, PARAM_FIELDS};
use crate::dom;
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const PANEL_ID: &str = "control-panel";

/// DOM widget bound to one parameter.
enum Control {
    Range {
        input: web::HtmlInputElement,
        readout: web::Element,
        step: f64,
    },
    Check(web::HtmlInputElement),
    Select(web::HtmlSelectElement),
    Color(web::HtmlInputElement),
}

/// The live-tuning control panel.
///
/// Built once from [`PARAM_FIELDS`]; every widget writes straight into the
/// shared [`Params`] from its DOM event, so the next animation frame picks the
/// change up. Edits to color fields raise `colors_dirty` for the frame loop.
pub struct Panel {
    root: web::Element,
    controls: FnvHashMap<&'static str, Control>,
}

pub fn build(
    document: &web::Document,
    params: Rc<RefCell<Params>>,
    colors_dirty: Rc<RefCell<bool>>,
) -> anyhow::Result<Panel> {
    let root = dom::create(document, "div")?;
    root.set_id(PANEL_ID);
    root.set_class_name("panel");

    let mut controls = FnvHashMap::default();
    for group in ParamGroup::ALL {
        let folder = dom::create(document, "details")?;
        _ = folder.set_attribute("open", "");
        let summary = dom::create(document, "summary")?;
        summary.set_text_content(Some(group.title()));
        dom::append(&folder, &summary)?;
        for f in PARAM_FIELDS.iter().filter(|f| f.group == group) {
            let (row, control) = build_row(document, f, &params, &colors_dirty)?;
            dom::append(&folder, &row)?;
            controls.insert(f.key, control);
        }
        dom::append(&root, &folder)?;
    }

    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    dom::append(&body, &root)?;

    let panel = Panel { root, controls };
    panel.sync(&params.borrow());
    log::info!("[panel] {} controls", panel.controls.len());
    Ok(panel)
}

impl Panel {
    /// Show or hide the panel. Widgets are re-synced when it comes back so
    /// they show the live values, including any the setters clamped.
    pub fn toggle(&self, params: &Params) {
        match self.root.class_list().toggle("hidden") {
            Ok(true) => log::debug!("[panel] hidden"),
            Ok(false) => self.sync(params),
            Err(e) => log::warn!("[panel] toggle failed: {:?}", e),
        }
    }

    /// Push parameter values into the widgets.
    pub fn sync(&self, params: &Params) {
        for (key, control) in &self.controls {
            let Ok(value) = params.get(key) else {
                continue;
            };
            match (control, value) {
                (
                    Control::Range {
                        input,
                        readout,
                        step,
                    },
                    ParamValue::Number(v),
                ) => {
                    input.set_value_as_number(v);
                    readout.set_text_content(Some(&format_number(v, *step)));
                }
                (Control::Check(input), ParamValue::Toggle(on)) => input.set_checked(on),
                (Control::Select(select), ParamValue::Choice(option)) => select.set_value(option),
                (Control::Color(input), ParamValue::Color(rgb)) => input.set_value(&rgb.to_hex()),
                _ => log::warn!("[panel] widget for `{}` does not match its value", key),
            }
        }
    }
}

fn build_row(
    document: &web::Document,
    field: &'static ParamField,
    params: &Rc<RefCell<Params>>,
    colors_dirty: &Rc<RefCell<bool>>,
) -> anyhow::Result<(web::Element, Control)> {
    let row = dom::create(document, "label")?;
    row.set_class_name("row");
    let name = dom::create(document, "span")?;
    name.set_class_name("name");
    name.set_text_content(Some(field.label));
    dom::append(&row, &name)?;

    let control = match field.kind {
        FieldKind::Number { min, max, step } => {
            let input: web::HtmlInputElement = dom::create_as(document, "input")?;
            input.set_type("range");
            input.set_min(&min.to_string());
            input.set_max(&max.to_string());
            input.set_step(&step.to_string());
            let readout = dom::create(document, "span")?;
            readout.set_class_name("readout");
            dom::append(&row, &input)?;
            dom::append(&row, &readout)?;

            let (p, dirty, src, out) = (
                params.clone(),
                colors_dirty.clone(),
                input.clone(),
                readout.clone(),
            );
            listen(&input, "input", move || {
                let v = src.value_as_number();
                let result = p.borrow_mut().set_number(field.key, v);
                if commit(field, &dirty, result) {
                    out.set_text_content(Some(&format_number(v, step)));
                }
            });
            Control::Range {
                input,
                readout,
                step,
            }
        }
        FieldKind::Toggle => {
            let input: web::HtmlInputElement = dom::create_as(document, "input")?;
            input.set_type("checkbox");
            dom::append(&row, &input)?;
            let (p, dirty, src) = (params.clone(), colors_dirty.clone(), input.clone());
            listen(&input, "change", move || {
                let result = p.borrow_mut().set_toggle(field.key, src.checked());
                commit(field, &dirty, result);
            });
            Control::Check(input)
        }
        FieldKind::Choice(options) => {
            let select: web::HtmlSelectElement = dom::create_as(document, "select")?;
            for option in options {
                let opt: web::HtmlOptionElement = dom::create_as(document, "option")?;
                opt.set_value(option);
                opt.set_text(option);
                dom::append(&select, &opt)?;
            }
            dom::append(&row, &select)?;
            let (p, dirty, src) = (params.clone(), colors_dirty.clone(), select.clone());
            listen(&select, "change", move || {
                let result = p.borrow_mut().set_choice(field.key, &src.value());
                commit(field, &dirty, result);
                // hand the keyboard back to the shortcuts
                _ = src.blur();
            });
            Control::Select(select)
        }
        FieldKind::Color => {
            let input: web::HtmlInputElement = dom::create_as(document, "input")?;
            input.set_type("color");
            dom::append(&row, &input)?;
            let (p, dirty, src) = (params.clone(), colors_dirty.clone(), input.clone());
            listen(&input, "input", move || {
                let result = p.borrow_mut().set_color(field.key, &src.value());
                commit(field, &dirty, result);
            });
            Control::Color(input)
        }
    };
    Ok((row, control))
}

/// Log a rejected edit, or flag the grid colors for rebuild when a color field changed.
fn commit(field: &ParamField, colors_dirty: &RefCell<bool>, result: Result<(), ParamError>) -> bool {
    match result {
        Ok(()) => {
            if field.affects_colors() {
                *colors_dirty.borrow_mut() = true;
            }
            true
        }
        Err(e) => {
            log::warn!("[panel] {}", e);
            false
        }
    }
}

fn listen(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn format_number(v: f64, step: f64) -> String {
    if step >= 1.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.2}", v)
    }
}
