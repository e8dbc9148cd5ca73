use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Function, Promise, Reflect};
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::JsFuture;
use web_sys::Element;
use shared::SessionUser;
use crate::session::SessionProvider;

const SCRIPT_ID: &str = "clerk-script";
const SCRIPT_SRC: &str = "https://cdn.jsdelivr.net/npm/@clerk/clerk-js@5/dist/clerk.browser.js";
const POLL_INTERVAL_MS: u32 = 100;
const MAX_POLLS: u32 = 100;

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn call(target: &JsValue, method: &str, args: &[&JsValue]) -> Result<JsValue, JsValue> {
    let func = get(target, method)
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or_else(|| JsValue::from_str(&format!("Clerk.{} is not a function", method)))?;
    let args = args.iter().copied().collect::<Array>();
    func.apply(target, &args)
}

fn log_call_failure(method: &str, error: &JsValue) {
    web_sys::console::warn_2(&format!("Clerk.{} failed:", method).into(), error);
}

fn inject_script(publishable_key: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.get_element_by_id(SCRIPT_ID).is_some() {
        return Ok(());
    }

    let script = document.create_element("script")?;
    script.set_id(SCRIPT_ID);
    script.set_attribute("src", SCRIPT_SRC)?;
    script.set_attribute("data-clerk-publishable-key", publishable_key)?;
    script.set_attribute("crossorigin", "anonymous")?;
    script.set_attribute("async", "true")?;
    document.head()
        .ok_or_else(|| JsValue::from_str("no <head>"))?
        .append_child(&script)?;
    Ok(())
}

/// Injects the hosted identity script, waits for `window.Clerk` and loads it.
pub async fn load(publishable_key: &str) -> Result<ClerkSession, JsValue> {
    inject_script(publishable_key)?;
    let window: JsValue = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .into();

    let mut clerk = None;
    for _ in 0..MAX_POLLS {
        clerk = get(&window, "Clerk");
        if clerk.is_some() {
            break;
        }
        TimeoutFuture::new(POLL_INTERVAL_MS).await;
    }
    let clerk = clerk.ok_or_else(|| JsValue::from_str("identity script did not load"))?;

    if let Ok(pending) = call(&clerk, "load", &[])?.dyn_into::<Promise>() {
        JsFuture::from(pending).await?;
    }

    Ok(ClerkSession { clerk })
}

#[derive(Clone)]
pub struct ClerkSession {
    clerk: JsValue,
}

/// Keeps an identity listener registered until dropped.
pub struct Subscription {
    _closure: Closure<dyn FnMut(JsValue)>,
    unsubscribe: Option<Function>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            let _ = unsubscribe.call0(&JsValue::NULL);
        }
    }
}

impl ClerkSession {
    pub fn subscribe(&self, on_change: impl Fn() + 'static) -> Subscription {
        let closure = Closure::wrap(Box::new(move |_resources: JsValue| {
            on_change();
        }) as Box<dyn FnMut(JsValue)>);

        let unsubscribe = match call(&self.clerk, "addListener", &[closure.as_ref()]) {
            Ok(handle) => handle.dyn_into::<Function>().ok(),
            Err(e) => {
                log_call_failure("addListener", &e);
                None
            }
        };

        Subscription { _closure: closure, unsubscribe }
    }
}

impl SessionProvider for ClerkSession {
    fn current_user(&self) -> Option<SessionUser> {
        let user = get(&self.clerk, "user")?;
        let email = get(&user, "primaryEmailAddress")
            .and_then(|address| get(&address, "emailAddress"))
            .and_then(|v| v.as_string())
            .unwrap_or_default();

        Some(SessionUser { email, is_signed_in: true })
    }

    fn redirect_to_sign_in(&self) {
        if let Err(e) = call(&self.clerk, "redirectToSignIn", &[]) {
            log_call_failure("redirectToSignIn", &e);
        }
    }

    fn mount_user_button(&self, node: &Element) {
        let node: &JsValue = node.as_ref();
        if let Err(e) = call(&self.clerk, "mountUserButton", &[node]) {
            log_call_failure("mountUserButton", &e);
        }
    }

    fn unmount_user_button(&self, node: &Element) {
        let node: &JsValue = node.as_ref();
        let _ = call(&self.clerk, "unmountUserButton", &[node]);
    }
}
