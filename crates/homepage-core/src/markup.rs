//! HTML for the data-driven sections.
//!
//! Builders return markup strings that the front-end assigns with
//! `set_inner_html`. Text is escaped; paper abstracts are authored HTML and
//! pass through untouched. Elements that need behavior afterwards carry
//! `data-*` hooks (`data-reveal`, `data-hover`, `data-initial`) or ids.

use crate::constants::CARD_STAGGER_MS;
use crate::data::{IprRecord, Member, Paper, Photo, Profile, Project, Tag, Team};
use std::fmt::Write;

pub const CAROUSEL_ROOT_CLASS: &str = "team-carousel";
pub const CAROUSEL_SLIDES_ID: &str = "team-carousel-slides";
pub const CAROUSEL_SLIDE_CLASS: &str = "w-full";
pub const CAROUSEL_PREV_ID: &str = "prev-btn";
pub const CAROUSEL_NEXT_ID: &str = "next-btn";
pub const CAROUSEL_INDICATORS_ID: &str = "carousel-indicators";
pub const CAROUSEL_INDICATOR_CLASS: &str = "carousel-indicator";

const BADGE_CLASS: &str = "w-32 h-32 rounded-full bg-gradient-to-r from-green-400 to-green-600 flex items-center justify-center text-white text-4xl mx-auto mb-4 font-bold";
const PANEL_CLASS: &str =
    "w-full bg-white rounded-xl p-5 shadow-md hover:shadow-lg transition-shadow duration-300";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Hover effect kinds attached through `data-hover`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hover {
    Member,
    Project,
    Tag,
}

/// Inline style values applied on pointer enter and leave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverStyle {
    pub enter_transform: &'static str,
    pub enter_shadow: &'static str,
    pub leave_transform: &'static str,
    pub leave_shadow: &'static str,
}

impl Hover {
    pub fn attr(self) -> &'static str {
        match self {
            Hover::Member => "member",
            Hover::Project => "project",
            Hover::Tag => "tag",
        }
    }

    pub fn from_attr(attr: &str) -> Option<Self> {
        match attr {
            "member" => Some(Hover::Member),
            "project" => Some(Hover::Project),
            "tag" => Some(Hover::Tag),
            _ => None,
        }
    }

    pub fn style(self) -> HoverStyle {
        match self {
            Hover::Member => HoverStyle {
                enter_transform: "translateY(-5px)",
                enter_shadow: "0 10px 20px rgba(0,0,0,0.1)",
                leave_transform: "translateY(0)",
                leave_shadow: "none",
            },
            Hover::Project => HoverStyle {
                enter_transform: "translateY(-8px)",
                enter_shadow: "0 14px 28px rgba(0, 0, 0, 0.1), 0 10px 10px rgba(0, 0, 0, 0.08)",
                leave_transform: "translateY(0)",
                leave_shadow: "0 4px 15px rgba(0, 0, 0, 0.1)",
            },
            Hover::Tag => HoverStyle {
                enter_transform: "scale(1.05)",
                enter_shadow: "0 2px 8px rgba(0,0,0,0.15)",
                leave_transform: "scale(1)",
                leave_shadow: "none",
            },
        }
    }
}

fn tags(out: &mut String, tags: &[Tag]) {
    for t in tags {
        _ = write!(
            out,
            r#"<span class="skill-tag {}">{}</span>"#,
            escape(&t.color),
            escape(&t.text)
        );
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

// ---------------- Profile ----------------

pub fn profile(p: &Profile) -> String {
    let mut out = String::new();
    _ = write!(
        out,
        r#"<div data-reveal="top" class="flex flex-col md:flex-row justify-between items-center mb-8 gap-4 opacity-0 transition-opacity duration-700"><h1 class="text-4xl md:text-5xl font-bold gradient-text">{name}</h1><div class="flex items-center"><div class="university-logo"><img src="{logo}" alt="学校logo" class="w-12 h-12 object-contain"></div><p class="text-sm font-semibold text-gray-700">{university}</p></div></div>"#,
        name = escape(&p.name),
        logo = escape(&p.images.university_logo),
        university = escape(&p.university),
    );

    out.push_str(r#"<div data-reveal="main" class="flex flex-col md:flex-row gap-8 opacity-0 transition-opacity duration-700 delay-200">"#);
    _ = write!(
        out,
        r#"<div class="w-full md:w-1/3 flex flex-col items-center"><img src="{id_photo}" alt="个人证件照" class="profile-photo w-full mx-auto rounded-xl shadow-lg border-4 border-white transform hover:scale-105 transition-all duration-300"><img src="{photo}" alt="个人照片" class="profile-photo w-full max-w-[300px] rounded-xl shadow-lg border-4 border-white transform hover:scale-105 transition-all duration-300 mt-4"></div>"#,
        id_photo = escape(&p.images.profile_zjz),
        photo = escape(&p.images.profile),
    );

    _ = write!(
        out,
        r#"<div class="w-full md:w-1/3 flex flex-col gap-6"><div class="w-full bg-white rounded-xl p-6 shadow-md hover:shadow-lg transition-shadow duration-300"><h2 class="text-2xl font-bold mb-4 flex items-center gap-2"><i class="fas fa-user-circle text-green-600"></i> 个人简介</h2><p class="mb-2 text-lg text-gray-800 font-medium">{title}</p><p class="mb-3 text-gray-700 bg-green-50 p-2 rounded-md"><i class="fas fa-calendar-alt mr-2 text-green-600"></i> {birthday}</p><p class="mb-2 text-gray-700 leading-relaxed">{intro}</p></div><div class="{panel}"><h3 class="font-bold text-xl mb-3 flex items-center gap-2"><i class="fas fa-envelope-open-text text-green-600"></i> 联系方式</h3><p class="mb-2 transition-all duration-200 hover:text-green-600"><i class="fas fa-envelope mr-2 text-green-600"></i> {email}</p><p class="transition-all duration-200 hover:text-green-600"><i class="fas fa-phone mr-2 text-green-600"></i> {phone}</p></div></div>"#,
        title = escape(&p.title),
        birthday = escape(&p.birthday),
        intro = escape(&p.introduction),
        panel = PANEL_CLASS,
        email = escape(&p.contact.email),
        phone = escape(&p.contact.phone),
    );

    _ = write!(
        out,
        r#"<div class="w-full md:w-1/3 flex flex-col gap-6"><div class="{panel}"><h3 class="font-bold text-xl mb-3 flex items-center gap-2"><i class="fas fa-graduation-cap text-green-600"></i> 教育背景</h3><p class="mb-2 transition-all duration-200 hover:text-green-600"><i class="fas fa-graduation-cap mr-2 text-green-600"></i> {degree}</p><p class="transition-all duration-200 hover:text-green-600"><i class="fas fa-university mr-2 text-green-600"></i> {school}</p></div><div class="{panel}"><h3 class="font-bold text-xl mb-4 flex items-center gap-2"><i class="fas fa-flask text-green-600"></i> 研究方向</h3><div style="display: flex; flex-direction: column;">"#,
        panel = PANEL_CLASS,
        degree = escape(&p.education.degree),
        school = escape(&p.education.university),
    );
    for area in &p.research_areas {
        _ = write!(
            out,
            r#"<span data-hover="{hover}" class="skill-tag {tag} mb-2 inline-block" style="display: inline-block; width: 100%; text-align: center;">{name}</span>"#,
            hover = Hover::Tag.attr(),
            tag = escape(&area.tag),
            name = escape(&area.name),
        );
    }
    out.push_str("</div></div></div></div>");
    out
}

// ---------------- Team ----------------

pub fn team(t: &Team) -> String {
    let mut out = String::new();
    _ = write!(
        out,
        r#"<h1 class="text-4xl font-bold mb-6 gradient-text">{title}</h1><div class="mb-10"><h2 class="text-2xl font-bold mb-6">{subtitle}</h2><p class="mb-8">{content}</p>"#,
        title = escape(&t.title),
        subtitle = escape(&t.introduction.subtitle),
        content = escape(&t.introduction.content),
    );
    out.push_str(&carousel(&t.carousel.photos));
    out.push_str(r#"<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">"#);
    for (i, m) in t.members.iter().enumerate() {
        out.push_str(&member_card(m, i));
    }
    out.push_str("</div></div>");
    out
}

pub fn carousel(photos: &[Photo]) -> String {
    let mut out = String::new();
    _ = write!(
        out,
        r#"<div class="{root} relative mb-8"><div class="relative overflow-hidden rounded-lg"><div class="flex transition-transform duration-300 ease-in-out" id="{slides}">"#,
        root = CAROUSEL_ROOT_CLASS,
        slides = CAROUSEL_SLIDES_ID,
    );
    for p in photos {
        _ = write!(
            out,
            r#"<div class="{slide} flex-shrink-0"><img src="{src}" alt="{alt}" class="team-photo"></div>"#,
            slide = CAROUSEL_SLIDE_CLASS,
            src = escape(&p.src),
            alt = escape(&p.alt),
        );
    }
    _ = write!(
        out,
        r#"</div></div><button class="carousel-control absolute left-4 top-1/2 -translate-y-1/2" id="{prev}"><i class="fas fa-chevron-left"></i></button><button class="carousel-control absolute right-4 top-1/2 -translate-y-1/2" id="{next}"><i class="fas fa-chevron-right"></i></button><div class="flex justify-center mt-4" id="{indicators}">"#,
        prev = CAROUSEL_PREV_ID,
        next = CAROUSEL_NEXT_ID,
        indicators = CAROUSEL_INDICATORS_ID,
    );
    for i in 0..photos.len() {
        let active = if i == 0 { " active" } else { "" };
        _ = write!(
            out,
            r#"<div class="{class}{active}" data-index="{i}"></div>"#,
            class = CAROUSEL_INDICATOR_CLASS,
        );
    }
    out.push_str("</div></div>");
    out
}

/// Round badge with the member's initial, used without an avatar and when
/// the avatar image fails to load.
pub fn initial_badge(initial: &str) -> String {
    format!(r#"<div class="{BADGE_CLASS}">{}</div>"#, escape(initial))
}

pub fn member_card(m: &Member, position: usize) -> String {
    let mut out = String::new();
    _ = write!(
        out,
        r#"<div data-hover="{hover}" data-initial="{initial}" class="card p-6 text-center fadeInUp" style="animation-delay: {delay}ms;">"#,
        hover = Hover::Member.attr(),
        initial = escape(&m.initial()),
        delay = position as u32 * CARD_STAGGER_MS,
    );
    match m.avatar_url() {
        Some(url) => {
            _ = write!(
                out,
                r#"<img src="{src}" alt="{alt}" class="member-avatar w-32 h-32 rounded-full object-cover mx-auto mb-4 border-4 border-green-500">"#,
                src = escape(url),
                alt = escape(&m.name),
            );
        }
        None => out.push_str(&initial_badge(&m.initial())),
    }
    _ = write!(
        out,
        r#"<h3 class="text-xl font-semibold">{name}</h3><p class="text-green-600 mb-3">{position}</p><p class="text-sm mb-4">{description}</p><div class="flex justify-center space-x-3"><a href="{linkedin}" class="text-green-600 hover:text-green-800"><i class="fab fa-linkedin"></i></a><a href="{email}" class="text-green-600 hover:text-green-800"><i class="fas fa-envelope"></i></a></div></div>"#,
        name = escape(&m.name),
        position = escape(&m.position),
        description = escape(&m.description),
        linkedin = escape(&m.social.linkedin),
        email = escape(&m.social.email),
    );
    out
}

// ---------------- Cards ----------------

pub fn paper_card(p: &Paper) -> String {
    let mut out = String::new();
    _ = write!(
        out,
        r#"<div class="research-card card p-6"><a href="{link}" target="_blank" rel="noopener noreferrer" class="block w-full h-full"><div class="paper-container"><img src="{image}" alt="{title}" class="paper-image"><div><h3 class="font-bold text-xl mb-2">{title}</h3><p class="author-info text-sm text-gray-700 mb-2">{authors}</p><p class="text-sm text-gray-600 mb-3"><i class="fas fa-book mr-2"></i>{journal}</p><div class="paper-content">{abstract_html}</div></div></div><div class="flex flex-wrap mt-4">"#,
        link = escape(&p.link),
        image = escape(&p.image),
        title = escape(&p.title),
        authors = escape(&p.authors),
        journal = escape(&p.journal),
        abstract_html = p.abstract_html,
    );
    tags(&mut out, &p.tags);
    out.push_str("</div></a></div>");
    out
}

pub fn papers(list: &[Paper]) -> String {
    list.iter().map(paper_card).collect()
}

pub fn project_card(p: &Project, position: usize) -> String {
    let mut out = String::new();
    _ = write!(
        out,
        r#"<div data-hover="{hover}" data-aos="fade-up" class="research-card card p-6 opacity-0 transform translate-y-4 transition-all duration-500 ease-out" style="transition-delay: {delay}ms;"><h3 class="font-bold text-xl mb-2">{title}</h3>"#,
        hover = Hover::Project.attr(),
        delay = position as u32 * CARD_STAGGER_MS,
        title = escape(&p.title),
    );
    if let Some(sub) = present(&p.subtitle) {
        _ = write!(out, r#"<p class="text-sm text-gray-600 mb-2">{}</p>"#, escape(sub));
    }
    if let Some(grant) = present(&p.grant_number) {
        _ = write!(
            out,
            r#"<p class="text-sm text-gray-600 mb-1"><i class="fas fa-hashtag mr-2"></i> 项目编号: {}</p>"#,
            escape(grant)
        );
    }
    if let Some(period) = present(&p.period) {
        _ = write!(
            out,
            r#"<p class="text-sm text-gray-600 mb-1"><i class="fas fa-calendar mr-2"></i> 执行期: {}</p>"#,
            escape(period)
        );
    }
    _ = write!(
        out,
        r#"<p class="text-sm text-gray-600 mb-3"><i class="fas fa-money-bill-wave mr-2"></i> 资助金额: {funding}</p><p class="text-sm font-medium text-green-700 mb-4"><i class="fas fa-user-tie mr-2"></i> 角色: {role}</p><div class="flex flex-wrap">"#,
        funding = escape(&p.funding),
        role = escape(&p.role),
    );
    tags(&mut out, &p.tags);
    out.push_str("</div></div>");
    out
}

pub fn projects(list: &[Project]) -> String {
    let mut out = String::from(r#"<div class="grid grid-cols-1 md:grid-cols-2 gap-6">"#);
    for (i, p) in list.iter().enumerate() {
        out.push_str(&project_card(p, i));
    }
    out.push_str("</div>");
    out
}

pub fn ipr_card(r: &IprRecord) -> String {
    let mut out = String::new();
    _ = write!(
        out,
        r#"<div class="research-card card p-6"><h3 class="font-bold text-xl mb-2">{title}</h3><p class="text-sm text-gray-600 mb-2"><i class="fas fa-user mr-2"></i>{authors}</p><p class="text-sm text-gray-600 mb-3"><i class="fas fa-calendar mr-2"></i>{date}</p><p class="mb-4 line-clamp-3">{description}</p><div class="flex flex-wrap">"#,
        title = escape(&r.title),
        authors = escape(&r.authors),
        date = escape(&r.date),
        description = escape(&r.description),
    );
    tags(&mut out, &r.tags);
    out.push_str("</div></div>");
    out
}

pub fn ipr(list: &[IprRecord]) -> String {
    list.iter().map(ipr_card).collect()
}
