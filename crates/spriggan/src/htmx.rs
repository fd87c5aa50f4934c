//! htmx attributes.
//!
//! See <https://htmx.org/reference/#attributes>. These only emit markup, the
//! htmx script gives them meaning in the browser.
use crate::{Node, Str, attr, attrs::as_str, bool_attr};

/// Response status telling htmx to stop polling.
pub const STATUS_STOP_POLLING: u16 = 286;

/// Names of the headers htmx sends with its requests.
pub mod request_header {
    pub const BOOSTED: &str = "HX-Boosted";
    pub const CURRENT_URL: &str = "HX-Current-URL";
    pub const HISTORY_RESTORE_REQUEST: &str = "HX-History-Restore-Request";
    pub const PROMPT: &str = "HX-Prompt";
    pub const REQUEST: &str = "HX-Request";
    pub const TARGET: &str = "HX-Target";
    pub const TRIGGER: &str = "HX-Trigger";
    pub const TRIGGER_NAME: &str = "HX-Trigger-Name";
}

/// Names of the response headers htmx acts on.
pub mod response_header {
    /// Client-side redirect without a full page reload.
    pub const LOCATION: &str = "HX-Location";
    pub const PUSH_URL: &str = "HX-Push-Url";
    /// Client-side redirect with a full page load.
    pub const REDIRECT: &str = "HX-Redirect";
    /// `"true"` makes the client do a full refresh.
    pub const REFRESH: &str = "HX-Refresh";
    pub const REPLACE_URL: &str = "HX-Replace-Url";
    /// Overrides the `hx-swap` of the triggering element.
    pub const RESWAP: &str = "HX-Reswap";
    pub const RETARGET: &str = "HX-Retarget";
    pub const RESELECT: &str = "HX-Reselect";
    pub const TRIGGER: &str = "HX-Trigger";
    pub const TRIGGER_AFTER_SETTLE: &str = "HX-Trigger-After-Settle";
    pub const TRIGGER_AFTER_SWAP: &str = "HX-Trigger-After-Swap";
}

pub fn hx_boost(v: bool) -> Node {
    attr("hx-boost", as_str(v))
}

pub fn hx_get(url: impl Into<Str>) -> Node {
    attr("hx-get", url)
}

pub fn hx_post(url: impl Into<Str>) -> Node {
    attr("hx-post", url)
}

pub fn hx_put(url: impl Into<Str>) -> Node {
    attr("hx-put", url)
}

pub fn hx_patch(url: impl Into<Str>) -> Node {
    attr("hx-patch", url)
}

pub fn hx_delete(url: impl Into<Str>) -> Node {
    attr("hx-delete", url)
}

pub fn hx_push_url(v: bool) -> Node {
    attr("hx-push-url", as_str(v))
}

/// CSS selector of the element the response is swapped into.
pub fn hx_target(target: impl Into<Str>) -> Node {
    attr("hx-target", target)
}

/// Response targets for error statuses, from the `response-targets`
/// extension.
pub fn hx_target_401(target: impl Into<Str>) -> Node {
    attr("hx-target-401", target)
}

pub fn hx_target_403(target: impl Into<Str>) -> Node {
    attr("hx-target-403", target)
}

pub fn hx_target_404(target: impl Into<Str>) -> Node {
    attr("hx-target-404", target)
}

pub fn hx_target_500(target: impl Into<Str>) -> Node {
    attr("hx-target-500", target)
}

pub fn hx_target_4xx(target: impl Into<Str>) -> Node {
    attr("hx-target-4xx", target)
}

pub fn hx_target_5xx(target: impl Into<Str>) -> Node {
    attr("hx-target-5xx", target)
}

pub fn hx_target_50x(target: impl Into<Str>) -> Node {
    attr("hx-target-50x", target)
}

pub fn hx_target_error(target: impl Into<Str>) -> Node {
    attr("hx-target-error", target)
}

pub fn hx_select(selector: impl Into<Str>) -> Node {
    attr("hx-select", selector)
}

pub fn hx_select_oob(selector: impl Into<Str>) -> Node {
    attr("hx-select-oob", selector)
}

/// How the response is swapped in. Takes a plain style or a
/// [`Swap`](crate::swap::Swap).
pub fn hx_swap(swap: impl Into<Str>) -> Node {
    attr("hx-swap", swap)
}

pub fn hx_swap_oob(swap: impl Into<Str>) -> Node {
    attr("hx-swap-oob", swap)
}

pub fn hx_trigger(trigger: impl Into<Str>) -> Node {
    attr("hx-trigger", trigger)
}

pub fn hx_confirm(msg: impl Into<Str>) -> Node {
    attr("hx-confirm", msg)
}

pub fn hx_prompt(msg: impl Into<Str>) -> Node {
    attr("hx-prompt", msg)
}

/// Run `js` when `event` fires, as `hx-on:{event}`.
pub fn hx_on(event: impl AsRef<str>, js: impl Into<Str>) -> Node {
    attr(format!("hx-on:{}", event.as_ref()), js)
}

pub fn hx_indicator(selector: impl Into<Str>) -> Node {
    attr("hx-indicator", selector)
}

pub fn hx_encoding(encoding: impl Into<Str>) -> Node {
    attr("hx-encoding", encoding)
}

/// Enable extensions, eg `hx_ext(HxExtension::JsonEnc)`.
pub fn hx_ext(ext: impl Into<Str>) -> Node {
    attr("hx-ext", ext)
}

/// Turn htmx processing off for this element and its children.
pub fn hx_disable() -> Node {
    bool_attr("hx-disable")
}

pub fn hx_disabled_elt(selector: impl Into<Str>) -> Node {
    attr("hx-disabled-elt", selector)
}

pub fn hx_validate(v: bool) -> Node {
    attr("hx-validate", as_str(v))
}

pub fn hx_include(selector: impl Into<Str>) -> Node {
    attr("hx-include", selector)
}

pub fn hx_sync(strategy: impl Into<Str>) -> Node {
    attr("hx-sync", strategy)
}

pub fn hx_params(params: impl Into<Str>) -> Node {
    attr("hx-params", params)
}

fn json_attr(name: &'static str, value: &serde_json::Value) -> Node {
    match serde_json::to_string(value) {
        Ok(json) => attr(name, json),
        Err(e) => {
            log::error!("could not serialize {name}: {e}");
            attr(name, "{}")
        }
    }
}

/// Extra request headers, serialized as a JSON object with sorted keys.
pub fn hx_headers<K, V>(headers: impl IntoIterator<Item = (K, V)>) -> Node
where
    K: Into<String>,
    V: Into<String>,
{
    let headers = headers
        .into_iter()
        .map(|(k, v)| (k.into(), serde_json::Value::String(v.into())))
        .collect::<serde_json::Map<_, _>>();
    json_attr("hx-headers", &serde_json::Value::Object(headers))
}

/// Extra values to submit with the request.
pub fn hx_vals(vals: &serde_json::Value) -> Node {
    json_attr("hx-vals", vals)
}

/// Names of the htmx extensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HxExtension {
    AlpineMorph,
    ClassTools,
    ClientSideTemplates,
    IgnoreDebug,
    JsonEnc,
    MultiSwap,
    PathDeps,
    ResponseTargets,
}

impl HxExtension {
    pub fn as_str(&self) -> &'static str {
        match self {
            HxExtension::AlpineMorph => "alpine-morph",
            HxExtension::ClassTools => "class-tools",
            HxExtension::ClientSideTemplates => "client-side-templates",
            HxExtension::IgnoreDebug => "ignore:debug",
            HxExtension::JsonEnc => "json-enc",
            HxExtension::MultiSwap => "multi-swap",
            HxExtension::PathDeps => "path-deps",
            HxExtension::ResponseTargets => "response-targets",
        }
    }
}

impl From<HxExtension> for Str {
    fn from(ext: HxExtension) -> Self {
        ext.as_str().into()
    }
}

/// Some of the events htmx fires, for use with [`hx_on`].
///
/// See <https://htmx.org/reference/#events>.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HxEvent {
    Abort,
    AfterOnLoad,
    AfterProcessNode,
    AfterRequest,
    AfterSettle,
    AfterSwap,
    BeforeCleanupElement,
    BeforeOnLoad,
    BeforeProcessNode,
    BeforeRequest,
    BeforeSend,
    BeforeSwap,
    ConfigRequest,
    Confirm,
    Load,
    OobAfterSwap,
    OobBeforeSwap,
    Prompt,
    ResponseError,
    SendError,
    SwapError,
    TargetError,
    Timeout,
    ValidationFailed,
    ValidationHalted,
    ValidationValidate,
}

impl HxEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            HxEvent::Abort => "htmx:abort",
            HxEvent::AfterOnLoad => "htmx:afterOnLoad",
            HxEvent::AfterProcessNode => "htmx:afterProcessNode",
            HxEvent::AfterRequest => "htmx:afterRequest",
            HxEvent::AfterSettle => "htmx:afterSettle",
            HxEvent::AfterSwap => "htmx:afterSwap",
            HxEvent::BeforeCleanupElement => "htmx:beforeCleanupElement",
            HxEvent::BeforeOnLoad => "htmx:beforeOnLoad",
            HxEvent::BeforeProcessNode => "htmx:beforeProcessNode",
            HxEvent::BeforeRequest => "htmx:beforeRequest",
            HxEvent::BeforeSend => "htmx:beforeSend",
            HxEvent::BeforeSwap => "htmx:beforeSwap",
            HxEvent::ConfigRequest => "htmx:configRequest",
            HxEvent::Confirm => "htmx:confirm",
            HxEvent::Load => "htmx:load",
            HxEvent::OobAfterSwap => "htmx:oobAfterSwap",
            HxEvent::OobBeforeSwap => "htmx:oobBeforeSwap",
            HxEvent::Prompt => "htmx:prompt",
            HxEvent::ResponseError => "htmx:responseError",
            HxEvent::SendError => "htmx:sendError",
            HxEvent::SwapError => "htmx:swapError",
            HxEvent::TargetError => "htmx:targetError",
            HxEvent::Timeout => "htmx:timeout",
            HxEvent::ValidationFailed => "htmx:validation:failed",
            HxEvent::ValidationHalted => "htmx:validation:halted",
            HxEvent::ValidationValidate => "htmx:validation:validate",
        }
    }
}

impl AsRef<str> for HxEvent {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// client-side-templates and hyperscript

pub fn mustache_template(id: impl Into<Str>) -> Node {
    attr("mustache-template", id)
}

pub fn handlebars_template(id: impl Into<Str>) -> Node {
    attr("handlebars-template", id)
}

pub fn nunjucks_template(id: impl Into<Str>) -> Node {
    attr("nunjucks-template", id)
}

pub fn xslt_template(id: impl Into<Str>) -> Node {
    attr("xslt-template", id)
}

/// A hyperscript snippet, written as the `_` attribute.
pub fn hyperscript(script: impl Into<Str>) -> Node {
    attr("_", script)
}
