// Stylesheet shipped with the preview page. Atomic layout units carry
// `break-inside: avoid` so the browser's own print path paginates the same
// way the snapshot exporter does.

pub const BASE_CSS: &str = r#"
body { margin: 0; background: #f1f5f9; font-family: Georgia, "Times New Roman", serif; color: #0f172a; }
.resume { background: #fff; margin: 2rem auto; max-width: 850px; min-height: 1100px; box-shadow: 0 25px 50px -12px rgba(0,0,0,.25); overflow: hidden; }
.resume.padded { padding: 48px; box-sizing: border-box; }
.resume h1, .resume h2, .resume h3, .resume p { margin: 0; }
.section { margin-bottom: 2.5rem; }
.row-between { display: flex; justify-content: space-between; align-items: baseline; gap: 1rem; }
.item-date { font-family: Helvetica, Arial, sans-serif; font-size: .8rem; font-weight: 700; color: #64748b; white-space: nowrap; }
.item-title { font-size: 1.2rem; font-weight: 700; }
.item-subtitle { font-weight: 600; margin-bottom: .5rem; }
.item-body { white-space: pre-wrap; line-height: 1.6; }
.item-link { font-family: Helvetica, Arial, sans-serif; font-size: .75rem; color: #4338ca; word-break: break-all; }
.experience-item, .education-item, .project-item { margin-bottom: 1.75rem; }
.chip-list { display: flex; flex-wrap: wrap; gap: .5rem; }
.chip { font-family: Helvetica, Arial, sans-serif; font-size: .85rem; font-weight: 600; border: 1px solid #e2e8f0; border-radius: 4px; padding: .2rem .75rem; }
.chip-level { margin-left: .35rem; font-size: .65rem; text-transform: uppercase; color: #64748b; }
.grid-2 { display: grid; grid-template-columns: 1fr 1fr; gap: 2.5rem; }
.grid-1 { display: grid; grid-template-columns: 1fr; }
.experience-item, .education-item, .project-item, .skill-group, .alpine-sidebar, .alpine-main { break-inside: avoid; page-break-inside: avoid; }
"#;

pub const MODERN_CSS: &str = r#"
.template-elite .resume-header { text-align: center; border-bottom: 2px solid #0f172a; padding-bottom: 2rem; margin-bottom: 2.5rem; }
.template-elite .resume-name { font-size: 2.8rem; letter-spacing: .2em; text-transform: uppercase; }
.template-elite .contact-line { margin-top: 1rem; font-family: Helvetica, Arial, sans-serif; font-size: .85rem; color: #475569; }
.template-elite .summary { font-size: 1.1rem; font-style: italic; text-align: justify; }
.template-elite .heading-major { font-size: 1.2rem; text-transform: uppercase; letter-spacing: .2em; border-bottom: 1px solid #cbd5e1; padding-bottom: .25rem; margin-bottom: 1.5rem; }
.template-elite .item-date { text-transform: uppercase; }
.template-elite .item-subtitle { color: #334155; font-size: 1.1rem; }
.template-elite .project-item .item-body { font-style: italic; font-size: .9rem; }
"#;

pub const BALANCED_CSS: &str = r#"
.template-balanced .resume-header { border-left: 8px solid #4f46e5; padding-left: 2rem; margin-bottom: 2.5rem; }
.template-balanced .resume-name { font-size: 2.8rem; letter-spacing: -.02em; }
.template-balanced .contact-line { margin-top: .5rem; font-family: Helvetica, Arial, sans-serif; font-size: .8rem; font-weight: 700; letter-spacing: .1em; text-transform: uppercase; color: #64748b; }
.template-balanced .summary { background: #f8fafc; border: 1px solid #e2e8f0; border-radius: 8px; padding: 1.5rem; font-style: italic; color: #334155; }
.template-balanced .heading-major { font-size: 1.2rem; text-transform: uppercase; letter-spacing: .1em; margin-bottom: 1.5rem; }
.template-balanced .section-projects .heading-major { color: #4f46e5; }
.template-balanced .heading-minor { font-family: Helvetica, Arial, sans-serif; font-size: .8rem; font-weight: 900; text-transform: uppercase; letter-spacing: .1em; color: #94a3b8; margin-bottom: 1rem; }
.template-balanced .item-subtitle { color: #4338ca; font-weight: 700; }
.template-balanced .grid-2, .template-balanced .grid-1 { border-top: 1px solid #f1f5f9; padding-top: 2rem; }
"#;

pub const ALPINE_CSS: &str = r#"
.template-alpine .alpine-layout { display: flex; min-height: 1100px; }
.template-alpine .alpine-sidebar { width: 33.333%; background: #0f172a; color: #e2e8f0; padding: 2.5rem; box-sizing: border-box; font-family: Helvetica, Arial, sans-serif; }
.template-alpine .alpine-main { flex: 1; padding: 3rem; }
.template-alpine .resume-name { color: #fff; font-size: 1.9rem; }
.template-alpine .role-hint { color: #818cf8; font-size: .75rem; font-weight: 700; letter-spacing: .15em; text-transform: uppercase; margin: .5rem 0 2.5rem; }
.template-alpine .heading-sidebar { font-size: .75rem; text-transform: uppercase; letter-spacing: .15em; color: #94a3b8; border-bottom: 1px solid #334155; padding-bottom: .25rem; margin-bottom: 1rem; }
.template-alpine .heading-accent { font-size: .75rem; text-transform: uppercase; letter-spacing: .15em; color: #4f46e5; margin-bottom: 1.5rem; }
.template-alpine .contact-item { font-size: .85rem; margin-bottom: .5rem; word-break: break-all; }
.template-alpine .skill-row { margin-bottom: .75rem; font-size: .75rem; }
.template-alpine .skill-bar { height: 4px; background: #1e293b; border-radius: 9999px; margin-top: .25rem; position: relative; overflow: hidden; }
.template-alpine .skill-bar::after { content: ""; position: absolute; inset: 0 auto 0 0; width: var(--fill); background: #6366f1; }
.template-alpine .row-level { font-size: .6rem; text-transform: uppercase; color: #818cf8; }
.template-alpine .alpine-sidebar .item-title { color: #fff; font-size: .9rem; }
.template-alpine .alpine-sidebar .item-subtitle { color: #94a3b8; font-size: .75rem; }
.template-alpine .experience-item { border-left: 2px solid #f1f5f9; padding-left: 1.5rem; }
.template-alpine .summary { font-style: italic; font-size: 1.1rem; color: #334155; }
.template-alpine .project-item { background: #f8fafc; border-left: 4px solid #6366f1; border-radius: 8px; padding: 1rem; }
"#;

pub const PRINT_CSS: &str = r#"
@page { size: A4 portrait; margin: 0; }
@media print {
  body { background: #fff; }
  .resume { margin: 0; box-shadow: none; max-width: none; }
}
"#;
