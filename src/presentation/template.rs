//! Template Tags
//!
//! Expands `{% tag args %}` placeholders in a page template. Hosts register
//! the tags they support in a [`TagRegistry`]; `{% load ... %}` lines are
//! accepted and dropped.
//!
//! ```ignore
//! let mut tags = TagRegistry::new();
//! tags.register(DrawMenuTag::new(Arc::new(service)));
//! let page = tags.render_template(source, &TagContext::new("/about/"))?;
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::application::MenuService;
use crate::domain::ports::{MenuRepository, RouteResolver};
use crate::error::{TreeMenuError, TreeMenuResult};

/// One `{% name args %}` tag, possibly spanning lines
static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{%\s*([A-Za-z_][A-Za-z0-9_]*)\s*(.*?)\s*%\}").unwrap());

/// One argument: double-quoted, single-quoted or bare
static ARG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)"|'([^']*)'|(\S+)"#).unwrap());

/// Request data visible to tags
#[derive(Debug, Clone, Copy)]
pub struct TagContext<'a> {
    /// Address of the page being rendered
    pub current_path: &'a str,
}

impl<'a> TagContext<'a> {
    pub fn new(current_path: &'a str) -> Self {
        Self { current_path }
    }
}

/// A tag that expands to text
pub trait TemplateTag: Send + Sync {
    /// Name used inside `{% ... %}`
    fn name(&self) -> &str;

    fn render(&self, args: &[String], ctx: &TagContext<'_>) -> TreeMenuResult<String>;
}

/// Tags available to a template, by name
#[derive(Default)]
pub struct TagRegistry {
    tags: BTreeMap<String, Box<dyn TemplateTag>>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `tag`, replacing any tag with the same name
    pub fn register(&mut self, tag: impl TemplateTag + 'static) -> &mut Self {
        self.tags.insert(tag.name().to_string(), Box::new(tag));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    /// Expand every tag in `source`
    ///
    /// Unknown tags and unterminated `{%` are errors; text outside tags is
    /// copied unchanged.
    pub fn render_template(&self, source: &str, ctx: &TagContext<'_>) -> TreeMenuResult<String> {
        let mut out = String::with_capacity(source.len());
        let mut last = 0;

        for caps in TAG_REGEX.captures_iter(source) {
            let Some(whole) = caps.get(0) else { continue };
            let text = &source[last..whole.start()];
            check_no_open_tag(text, last)?;
            out.push_str(text);

            let name = &caps[1];
            let args = parse_args(caps.get(2).map_or("", |m| m.as_str()));
            out.push_str(&self.expand(name, &args, ctx)?);
            last = whole.end();
        }

        let rest = &source[last..];
        check_no_open_tag(rest, last)?;
        out.push_str(rest);
        Ok(out)
    }

    fn expand(&self, name: &str, args: &[String], ctx: &TagContext<'_>) -> TreeMenuResult<String> {
        if name == "load" {
            return Ok(String::new());
        }

        let tag = self
            .tags
            .get(name)
            .ok_or_else(|| TreeMenuError::UnknownTemplateTag {
                name: name.to_string(),
            })?;
        tracing::debug!(tag = name, ?args, "expanding template tag");
        tag.render(args, ctx)
    }
}

fn check_no_open_tag(text: &str, offset: usize) -> TreeMenuResult<()> {
    match text.find("{%") {
        Some(pos) => Err(TreeMenuError::TemplateSyntax {
            message: format!("unclosed tag at byte {}", offset + pos),
        }),
        None => Ok(()),
    }
}

fn parse_args(raw: &str) -> Vec<String> {
    ARG_REGEX
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// `{% draw_menu "name" %}` backed by a shared [`MenuService`]
pub struct DrawMenuTag<MR, RR>
where
    MR: MenuRepository,
    RR: RouteResolver,
{
    service: Arc<MenuService<MR, RR>>,
}

impl<MR, RR> DrawMenuTag<MR, RR>
where
    MR: MenuRepository,
    RR: RouteResolver,
{
    pub const NAME: &'static str = "draw_menu";

    pub fn new(service: Arc<MenuService<MR, RR>>) -> Self {
        Self { service }
    }
}

impl<MR, RR> TemplateTag for DrawMenuTag<MR, RR>
where
    MR: MenuRepository,
    RR: RouteResolver,
{
    fn name(&self) -> &str {
        Self::NAME
    }

    fn render(&self, args: &[String], ctx: &TagContext<'_>) -> TreeMenuResult<String> {
        let [menu_name] = args else {
            return Err(TreeMenuError::TemplateSyntax {
                message: format!("draw_menu takes one menu name, got {} arguments", args.len()),
            });
        };
        self.service.draw_menu(menu_name, ctx.current_path)
    }
}
