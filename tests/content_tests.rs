// Host-side tests for section loading rules, JSON decoding and markup.

use homepage_core::data::{initial_of, Member, Paper, Project, Tag};
use homepage_core::markup::{self, escape, Hover};
use homepage_core::sections::check_status;
use homepage_core::{Content, LoadError, LoadResult, Outcome, Placeholder, Section};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn urls_are_cache_busted() {
    assert_eq!(
        Section::Papers.url(1_700_000_000_123),
        "src/jsons/papers.json?t=1700000000123"
    );
    for s in Section::ALL {
        assert!(s.url(1).starts_with(s.json_path()));
        assert!(s.json_path().ends_with(&format!("{}.json", s.name())));
    }
}

#[test]
fn status_outside_2xx_is_an_error() {
    assert!(check_status(200).is_ok());
    assert!(check_status(204).is_ok());
    assert!(matches!(check_status(304), Err(LoadError::Http { status: 304 })));
    let err = check_status(404).unwrap_err();
    assert_eq!(err.to_string(), "network response error: 404");
    assert!(err.is_user_visible());
    assert!(!LoadError::MissingContainer("#ipr .grid").is_user_visible());
}

#[test]
fn appended_placeholders_belong_to_profile_and_team() {
    for s in Section::ALL {
        let appended = matches!(s.placeholder(), Placeholder::Appended { .. });
        assert_eq!(appended, matches!(s, Section::Profile | Section::Team), "{s:?}");
    }
    assert_eq!(Section::Profile.failure_message(), "加载失败，请刷新页面重试");
}

#[test]
fn profile_name_becomes_the_heading() {
    let body = r#"{"name": "A. Lee", "research_areas": [{"tag": "tag-green", "name": "Soil"}]}"#;
    let content = Content::decode(Section::Profile, body).expect("profile");
    assert_eq!(content.record_count(), 1);
    let html = content.markup();
    assert!(html.contains(r#"<h1 class="text-4xl md:text-5xl font-bold gradient-text">A. Lee</h1>"#));
    assert_eq!(count(&html, r#"data-reveal="top""#), 1);
    assert_eq!(count(&html, r#"data-reveal="main""#), 1);
    assert_eq!(count(&html, r#"data-hover="tag""#), 1);
    assert!(html.contains(">Soil</span>"));
}

#[test]
fn missing_fields_render_empty() {
    let content = Content::decode(Section::Profile, "{}").expect("profile");
    let html = content.markup();
    assert!(html.contains(r#"gradient-text"></h1>"#));
    assert!(!html.contains("undefined"));
}

#[test]
fn wrong_types_are_decode_errors() {
    let err = Content::decode(Section::Papers, r#"{"title": "not a list"}"#).unwrap_err();
    assert!(matches!(err, LoadError::Decode(_)));
    assert!(err.is_user_visible());
    assert!(Content::decode(Section::Team, "not json").is_err());
    assert!(Content::decode(Section::Ipr, r#"[{"tags": "x"}]"#).is_err());
}

#[test]
fn loaded_profile_drops_placeholder_and_sets_heading() {
    let result = Content::decode(Section::Profile, r#"{"name": "A. Lee", "university": "X"}"#);
    let outcome = Section::Profile.settle(&result);
    assert!(outcome.remove_placeholder);
    assert_eq!(outcome.loading_text, None);
    let html = outcome.container_html.expect("profile markup");
    let heading = r#"<h1 class="text-4xl md:text-5xl font-bold gradient-text">"#;
    let start = html.find(heading).expect("heading") + heading.len();
    let end = start + html[start..].find("</h1>").expect("closing tag");
    assert_eq!(&html[start..end], "A. Lee");
    assert!(!html.contains("加载中"));
}

#[test]
fn papers_404_shows_only_the_failure_message() {
    let result: LoadResult<Content> = check_status(404).map(|_| Content::Papers(Vec::new()));
    let outcome = Section::Papers.settle(&result);
    let html = outcome.container_html.expect("failure markup");
    assert_eq!(html, r#"<p class="text-red-500">加载论文数据失败</p>"#);
    assert!(!html.contains("research-card"));
    assert!(!outcome.remove_placeholder);
    assert_eq!(outcome.loading_text, None);
}

#[test]
fn appended_placeholders_turn_into_the_failure_text() {
    for section in [Section::Profile, Section::Team] {
        let result: LoadResult<Content> = Err(LoadError::Network("offline".into()));
        let outcome = section.settle(&result);
        assert_eq!(outcome.loading_text, Some("加载失败，请刷新页面重试"));
        assert_eq!(outcome.container_html, None);
        assert!(!outcome.remove_placeholder);
    }
}

#[test]
fn replaced_placeholders_are_swapped_for_the_failure_markup() {
    let result = Content::decode(Section::Projects, "{not json");
    assert!(result.is_err());
    for section in [Section::Projects, Section::Ipr] {
        let outcome = section.settle(&result);
        assert_eq!(outcome.container_html.as_deref(), Some(section.failure_message()));
        assert_eq!(outcome.loading_text, None);
    }
}

#[test]
fn missing_container_leaves_the_page_alone() {
    let result: LoadResult<Content> = Err(LoadError::MissingContainer("#ipr .grid"));
    assert_eq!(Section::Ipr.settle(&result), Outcome::default());
}

#[test]
fn loaded_lists_replace_the_loading_markup() {
    let result = Content::decode(Section::Ipr, r#"[{"title": "Patent"}]"#);
    let outcome = Section::Ipr.settle(&result);
    assert!(!outcome.remove_placeholder);
    let html = outcome.container_html.expect("ipr markup");
    assert_eq!(count(&html, "research-card"), 1);
    assert!(!html.contains("加载知识产权数据中"));
}

#[test]
fn team_markup_has_slides_indicators_and_avatars() {
    let body = r##"{
        "title": "Our Lab",
        "introduction": {"subtitle": "Who we are", "content": "Plants."},
        "carousel": {"photos": [
            {"src": "a.jpg", "alt": "A"},
            {"src": "b.jpg", "alt": "B"},
            {"src": "c.jpg", "alt": "C"}
        ]},
        "members": [
            {"name": "zhang", "position": "PhD", "description": "", "social": {"linkedin": "#", "email": "mailto:z@x"}},
            {"name": "Li", "position": "MSc", "description": "", "avatar": "li.png", "social": {}},
            {"name": "wu", "avatar": ""}
        ]
    }"##;
    let content = Content::decode(Section::Team, body).expect("team");
    assert_eq!(content.record_count(), 3);
    let html = content.markup();

    assert_eq!(count(&html, r#"id="team-carousel-slides""#), 1);
    assert_eq!(count(&html, r#"<div class="w-full flex-shrink-0">"#), 3);
    assert_eq!(count(&html, r#"class="carousel-indicator"#), 3);
    assert_eq!(
        count(&html, r#"<div class="carousel-indicator active" data-index="0">"#),
        1
    );
    assert_eq!(count(&html, " active\""), 1);
    assert!(html.contains(r#"id="prev-btn""#) && html.contains(r#"id="next-btn""#));

    assert_eq!(count(&html, r#"data-hover="member""#), 3);
    assert_eq!(count(&html, "member-avatar"), 1);
    assert!(html.contains(r#"data-initial="Z""#));
    assert!(html.contains(&markup::initial_badge("Z")));
    assert!(html.contains(&markup::initial_badge("W")));
    assert!(html.contains("animation-delay: 200ms;"));
}

#[test]
fn empty_photo_list_renders_no_slides() {
    let html = markup::carousel(&[]);
    assert!(html.contains(r#"id="team-carousel-slides""#));
    assert_eq!(count(&html, "team-photo"), 0);
    assert_eq!(count(&html, "data-index"), 0);
}

#[test]
fn member_initial_is_uppercased_first_char() {
    assert_eq!(initial_of("alice"), "A");
    assert_eq!(initial_of("李华"), "李");
    assert_eq!(initial_of(""), "");
    let m = Member {
        name: "ömer".into(),
        avatar: Some(String::new()),
        ..Member::default()
    };
    assert_eq!(m.initial(), "Ö");
    assert_eq!(m.avatar_url(), None);
}

#[test]
fn project_optional_lines_are_omitted() {
    let bare = Project {
        title: "Drought".into(),
        funding: "10k".into(),
        role: "PI".into(),
        subtitle: Some(String::new()),
        ..Project::default()
    };
    let html = markup::project_card(&bare, 0);
    assert!(!html.contains("项目编号"));
    assert!(!html.contains("执行期"));
    assert!(!html.contains(r#"<p class="text-sm text-gray-600 mb-2">"#));
    assert!(html.contains("资助金额: 10k"));
    assert!(html.contains("角色: PI"));

    let full: Vec<Project> = serde_json::from_str(
        r#"[{"title": "T", "subtitle": "S", "grantNumber": "G-1", "period": "2020-2024",
             "funding": "1", "role": "r", "tags": [{"color": "tag-blue", "text": "x"}]}]"#,
    )
    .expect("projects");
    let html = markup::projects(&full);
    assert!(html.contains("项目编号: G-1"));
    assert!(html.contains("执行期: 2020-2024"));
    assert!(html.contains(r#"<span class="skill-tag tag-blue">x</span>"#));
    assert!(html.contains("transition-delay: 0ms;"));
}

#[test]
fn text_is_escaped_but_abstracts_pass_through() {
    assert_eq!(
        escape(r#"<b>"Tom" & 'Jerry'</b>"#),
        "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
    );
    let paper = Paper {
        title: "A <b> B".into(),
        abstract_html: "<em>key</em> result".into(),
        tags: vec![Tag {
            color: "tag-green".into(),
            text: "R&D".into(),
        }],
        ..Paper::default()
    };
    let html = markup::papers(&[paper.clone(), paper]);
    assert_eq!(count(&html, "research-card"), 2);
    assert!(html.contains("A &lt;b&gt; B"));
    assert!(html.contains(r#"<div class="paper-content"><em>key</em> result</div>"#));
    assert!(html.contains(">R&amp;D</span>"));
}

#[test]
fn ipr_records_render_one_card_each() {
    let content = Content::decode(
        Section::Ipr,
        r#"[{"title": "Patent", "authors": "A", "date": "2023", "description": "d"}, {"title": "Copyright"}]"#,
    )
    .expect("ipr");
    assert_eq!(content.record_count(), 2);
    assert_eq!(count(&content.markup(), "research-card"), 2);
    assert_eq!(Content::decode(Section::Ipr, "[]").expect("ipr").markup(), "");
}

#[test]
fn hover_kinds_round_trip_through_attributes() {
    for h in [Hover::Member, Hover::Project, Hover::Tag] {
        assert_eq!(Hover::from_attr(h.attr()), Some(h));
        let style = h.style();
        assert_ne!(style.enter_transform, style.leave_transform);
    }
    assert_eq!(Hover::from_attr("card"), None);
}

#[test]
fn numeric_display_fields_render_as_text() {
    let profile = Content::decode(
        Section::Profile,
        r#"{"name": "A. Lee", "birthday": 1990, "contact": {"email": null, "phone": 13800138000}}"#,
    )
    .expect("profile");
    let html = profile.markup();
    assert!(html.contains("13800138000"));
    assert!(html.contains("1990"));

    let projects: Vec<Project> = serde_json::from_str(
        r#"[{"title": "T", "funding": 2.5, "role": "PI", "grantNumber": 42, "subtitle": null}]"#,
    )
    .expect("projects");
    assert_eq!(projects[0].funding, "2.5");
    assert_eq!(projects[0].grant_number.as_deref(), Some("42"));
    assert_eq!(projects[0].subtitle, None);

    let ipr = Content::decode(Section::Ipr, r#"[{"title": "P", "date": 2023}]"#).expect("ipr");
    assert!(ipr.markup().contains("2023"));
}

#[test]
fn structured_values_in_text_fields_are_still_rejected() {
    assert!(Content::decode(Section::Ipr, r#"[{"title": {"zh": "专利"}}]"#).is_err());
    assert!(Content::decode(Section::Papers, r#"[{"authors": ["A", "B"]}]"#).is_err());
}
