//! DOM side of the contact form
//!
//! Looks up the form's elements by id, forwards their events to the
//! controller, and writes controller state back into the page.

use std::cell::RefCell;
use std::rc::Rc;

use contact_form::{
    FieldName, FormConfig, FormController, HideTicket, ReqwestTransport, SubmissionOutcome,
    SubmitError, SubmitStep, WebhookTransport,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement,
};

pub const FORM_ID: &str = "contactForm";
pub const SUBMIT_ID: &str = "submitBtn";
pub const RESPONSE_ID: &str = "responseMessage";

/// Text-bearing form control
#[derive(Clone)]
enum FieldInput {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl FieldInput {
    fn from_element(element: Element) -> Result<Self, JsValue> {
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Ok(FieldInput::Input(input)),
            Err(element) => element,
        };
        element
            .dyn_into::<HtmlTextAreaElement>()
            .map(FieldInput::TextArea)
            .map_err(|_| JsValue::from_str("field is neither an input nor a textarea"))
    }

    fn value(&self) -> String {
        match self {
            FieldInput::Input(el) => el.value(),
            FieldInput::TextArea(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            FieldInput::Input(el) => el.set_value(value),
            FieldInput::TextArea(el) => el.set_value(value),
        }
    }

    fn html(&self) -> &HtmlElement {
        match self {
            FieldInput::Input(el) => el,
            FieldInput::TextArea(el) => el,
        }
    }
}

struct FieldNodes {
    name: FieldName,
    input: FieldInput,
    error_slot: Element,
}

/// Handles to every element the controller renders into
pub struct FormDom {
    form: Element,
    submit: HtmlButtonElement,
    response: Element,
    fields: Vec<FieldNodes>,
}

fn by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

impl FormDom {
    pub fn locate(document: &Document) -> Result<Self, JsValue> {
        let fields = FieldName::ALL
            .into_iter()
            .map(|name| -> Result<FieldNodes, JsValue> {
                Ok(FieldNodes {
                    name,
                    input: FieldInput::from_element(by_id(document, name.as_str())?)?,
                    error_slot: by_id(document, name.error_slot_id())?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            form: by_id(document, FORM_ID)?,
            submit: by_id(document, SUBMIT_ID)?.dyn_into::<HtmlButtonElement>()?,
            response: by_id(document, RESPONSE_ID)?,
            fields,
        })
    }

    /// Configuration overrides from `data-*` attributes on the form
    pub fn config(&self) -> Result<FormConfig, JsValue> {
        let mut config = FormConfig::default();
        if let Some(url) = self.form.get_attribute("data-webhook-url") {
            config.webhook_url = url;
        }
        if let Some(ms) = self.form.get_attribute("data-auto-hide-ms") {
            config.auto_hide_ms = ms
                .parse()
                .map_err(|_| JsValue::from_str(&format!("invalid data-auto-hide-ms: {ms:?}")))?;
        }
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(config)
    }

    fn node(&self, name: FieldName) -> &FieldNodes {
        &self.fields[name.index()]
    }

    /// Copy the current input values into the controller
    fn read_values(&self, controller: &mut FormController) {
        for field in &self.fields {
            controller.set_value(field.name, field.input.value());
        }
    }

    fn render_field(&self, controller: &FormController, name: FieldName) {
        let state = controller.field(name);
        let node = self.node(name);
        node.error_slot.set_text_content(Some(state.error()));
        // Styling failures only affect the border cue
        let _ = node
            .input
            .html()
            .style()
            .set_property("border-color", state.border().color());
    }

    fn render_message(&self, controller: &FormController) {
        let feedback = controller.feedback();
        if let Some(message) = feedback.message() {
            self.response.set_text_content(Some(&message.text));
        }
        self.response.set_class_name(&feedback.class_name());
    }

    fn render_submit(&self, controller: &FormController) {
        let loading = controller.submit_control().is_loading();
        self.submit.set_disabled(controller.submit_control().is_disabled());
        let _ = self.submit.class_list().toggle_with_force("loading", loading);
    }

    /// Write the whole controller state into the page
    pub fn render(&self, controller: &FormController) {
        for field in &self.fields {
            let value = controller.field(field.name).value();
            if field.input.value() != value {
                field.input.set_value(value);
            }
            self.render_field(controller, field.name);
        }
        self.render_message(controller);
        self.render_submit(controller);
    }
}

/// A mounted form: the controller plus everything its handlers share
#[derive(Clone)]
pub struct MountedForm {
    dom: Rc<FormDom>,
    controller: Rc<RefCell<FormController>>,
    transport: Rc<ReqwestTransport>,
}

impl MountedForm {
    pub fn mount(document: &Document) -> Result<Self, JsValue> {
        let dom = FormDom::locate(document)?;
        let controller = FormController::new(dom.config()?);

        let mounted = Self {
            dom: Rc::new(dom),
            controller: Rc::new(RefCell::new(controller)),
            transport: Rc::new(ReqwestTransport::new()),
        };
        mounted.wire_fields()?;
        mounted.wire_submit()?;
        Ok(mounted)
    }

    fn wire_fields(&self) -> Result<(), JsValue> {
        for field in &self.dom.fields {
            let name = field.name;
            let target = field.input.html();

            let form = self.clone();
            let on_blur = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let value = form.dom.node(name).input.value();
                let mut controller = form.controller.borrow_mut();
                controller.set_value(name, value);
                controller.handle_blur(name);
                form.dom.render_field(&controller, name);
            });
            target.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())?;
            on_blur.forget();

            let form = self.clone();
            let on_input = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let value = form.dom.node(name).input.value();
                let mut controller = form.controller.borrow_mut();
                controller.handle_input(name, value);
                form.dom.render_field(&controller, name);
            });
            target.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
            on_input.forget();
        }
        Ok(())
    }

    fn wire_submit(&self) -> Result<(), JsValue> {
        let form = self.clone();
        let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            form.handle_submit();
        });
        self.dom
            .form
            .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        on_submit.forget();
        Ok(())
    }

    fn handle_submit(&self) {
        let step = {
            let mut controller = self.controller.borrow_mut();
            self.dom.read_values(&mut controller);
            let step = controller.begin_submit();
            self.dom.render(&controller);
            step
        };

        match step {
            SubmitStep::Aborted(submission) => self.schedule_hide(submission.hide),
            SubmitStep::Send(request) => {
                let form = self.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    // No controller borrow is held across this await
                    let result = form.transport.send(&request).await;
                    let submission = {
                        let mut controller = form.controller.borrow_mut();
                        let submission = controller.finish_submit(result);
                        form.dom.render(&controller);
                        submission
                    };
                    if let SubmissionOutcome::Failed(SubmitError::Transport(err)) =
                        &submission.outcome
                    {
                        web_sys::console::error_1(&format!("Network error: {err}").into());
                    }
                    form.schedule_hide(submission.hide);
                });
            }
        }
    }

    fn schedule_hide(&self, ticket: HideTicket) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let delay = i32::try_from(self.controller.borrow().config().auto_hide_ms).unwrap_or(i32::MAX);

        let form = self.clone();
        let callback = Closure::once_into_js(move || {
            let mut controller = form.controller.borrow_mut();
            if controller.expire_message(ticket) {
                form.dom.render_message(&controller);
            }
        });

        if let Err(err) = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
        {
            web_sys::console::error_2(&"Failed to schedule message auto-hide".into(), &err);
        }
    }
}
