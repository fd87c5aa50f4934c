//! A builder for `hx-swap` values.
//!
//! ```
//! use spriggan::swap::{Swap, SwapStyle};
//!
//! let swap = Swap::new().style(SwapStyle::OuterHtml).scroll_top(None).transition(true);
//! assert_eq!("outerHTML scroll:top transition:true", swap.to_string());
//! ```
use std::time::Duration;

use crate::{Str, attrs::as_str};

/// Delay before the new content is swapped in, when none is given.
pub const DEFAULT_SWAP_DELAY: Duration = Duration::from_millis(0);
/// Delay between the swap and the settle step, when none is given.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(20);

/// Where the response goes relative to the target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwapStyle {
    #[default]
    InnerHtml,
    OuterHtml,
    BeforeBegin,
    AfterBegin,
    BeforeEnd,
    AfterEnd,
    Delete,
    None,
}

impl SwapStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapStyle::InnerHtml => "innerHTML",
            SwapStyle::OuterHtml => "outerHTML",
            SwapStyle::BeforeBegin => "beforebegin",
            SwapStyle::AfterBegin => "afterbegin",
            SwapStyle::BeforeEnd => "beforeend",
            SwapStyle::AfterEnd => "afterend",
            SwapStyle::Delete => "delete",
            SwapStyle::None => "none",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    Scroll,
    Show,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Top,
    Bottom,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Scrolling {
    mode: ScrollMode,
    target: Option<Str>,
    direction: ScrollDirection,
}

impl std::fmt::Display for Scrolling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self.mode {
            ScrollMode::Scroll => "scroll",
            ScrollMode::Show => "show",
        })?;
        if let Some(target) = &self.target {
            write!(f, ":{target}")?;
        }
        f.write_str(match self.direction {
            ScrollDirection::Top => ":top",
            ScrollDirection::Bottom => ":bottom",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Timing {
    Swap(Duration),
    Settle(Duration),
}

/// Formats whole seconds as `<n>s` and anything else as `<n>ms`.
///
/// Precision is one millisecond. Partial milliseconds round up, so a nonzero
/// delay never prints as `0ms`.
struct HtmxDuration(Duration);

impl std::fmt::Display for HtmxDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let millis = self.0.as_nanos().div_ceil(1_000_000);
        if millis > 0 && millis % 1000 == 0 {
            write!(f, "{}s", millis / 1000)
        } else {
            write!(f, "{millis}ms")
        }
    }
}

/// An `hx-swap` value.
///
/// Renders its parts separated by single spaces in a fixed order: style,
/// scrolling, `transition:`, `ignoreTitle:`, `focus-scroll:`, then timing.
/// Only the style is always present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Swap {
    style: SwapStyle,
    scrolling: Option<Scrolling>,
    transition: Option<bool>,
    ignore_title: Option<bool>,
    focus_scroll: Option<bool>,
    timing: Option<Timing>,
}

impl Swap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: SwapStyle) -> Self {
        self.style = style;
        self
    }

    fn scrolling(
        mut self,
        mode: ScrollMode,
        direction: ScrollDirection,
        target: Option<Str>,
    ) -> Self {
        self.scrolling = Some(Scrolling {
            mode,
            target,
            direction,
        });
        self
    }

    /// Scroll the target, or the element matching `target`, after the swap.
    pub fn scroll(self, direction: ScrollDirection, target: Option<Str>) -> Self {
        self.scrolling(ScrollMode::Scroll, direction, target)
    }

    pub fn scroll_top(self, target: Option<Str>) -> Self {
        self.scroll(ScrollDirection::Top, target)
    }

    pub fn scroll_bottom(self, target: Option<Str>) -> Self {
        self.scroll(ScrollDirection::Bottom, target)
    }

    /// Scroll the target, or the element matching `target`, into view.
    pub fn show(self, direction: ScrollDirection, target: Option<Str>) -> Self {
        self.scrolling(ScrollMode::Show, direction, target)
    }

    pub fn show_top(self, target: Option<Str>) -> Self {
        self.show(ScrollDirection::Top, target)
    }

    pub fn show_bottom(self, target: Option<Str>) -> Self {
        self.show(ScrollDirection::Bottom, target)
    }

    /// Wait `delay` after the response arrives before swapping. Replaces any
    /// settle timing.
    pub fn swap(mut self, delay: Option<Duration>) -> Self {
        self.timing = Some(Timing::Swap(delay.unwrap_or(DEFAULT_SWAP_DELAY)));
        self
    }

    /// Wait `delay` between the swap and the settle. Replaces any swap
    /// timing.
    pub fn settle(mut self, delay: Option<Duration>) -> Self {
        self.timing = Some(Timing::Settle(delay.unwrap_or(DEFAULT_SETTLE_DELAY)));
        self
    }

    /// Use the View Transitions API.
    pub fn transition(mut self, transition: bool) -> Self {
        self.transition = Some(transition);
        self
    }

    pub fn ignore_title(mut self, ignore_title: bool) -> Self {
        self.ignore_title = Some(ignore_title);
        self
    }

    pub fn focus_scroll(mut self, focus_scroll: bool) -> Self {
        self.focus_scroll = Some(focus_scroll);
        self
    }
}

impl std::fmt::Display for Swap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.style.as_str())?;
        if let Some(scrolling) = &self.scrolling {
            write!(f, " {scrolling}")?;
        }
        if let Some(b) = self.transition {
            write!(f, " transition:{}", as_str(b))?;
        }
        if let Some(b) = self.ignore_title {
            write!(f, " ignoreTitle:{}", as_str(b))?;
        }
        if let Some(b) = self.focus_scroll {
            write!(f, " focus-scroll:{}", as_str(b))?;
        }
        match self.timing {
            Some(Timing::Swap(d)) => write!(f, " swap:{}", HtmxDuration(d)),
            Some(Timing::Settle(d)) => write!(f, " settle:{}", HtmxDuration(d)),
            None => Ok(()),
        }
    }
}

impl From<&Swap> for Str {
    fn from(swap: &Swap) -> Self {
        swap.to_string().into()
    }
}

impl From<Swap> for Str {
    fn from(swap: Swap) -> Self {
        Str::from(&swap)
    }
}

impl From<SwapStyle> for Str {
    fn from(style: SwapStyle) -> Self {
        style.as_str().into()
    }
}
