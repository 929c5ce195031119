//! CSS and document policy constants for the landing page.
//!
//! The stylesheet is inlined into `<head>` so the generated page is a single
//! self-contained file apart from the web fonts.
//!
//! # Customization
//!
//! ```rust
//! use prism_site::styles::PRISM_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", PRISM_CSS, my_css);
//! ```

/// Content-Security-Policy for the page.
///
/// No scripts, no fetches, and `form-action 'none'` keeps the waitlist form
/// from submitting or navigating anywhere.
pub const CSP: &str = "default-src 'none'; img-src 'self' data:; style-src 'unsafe-inline' https://fonts.googleapis.com; font-src https://fonts.gstatic.com; script-src 'none'; connect-src 'none'; form-action 'none'; base-uri 'none';";

/// Google Fonts stylesheet for Inter and JetBrains Mono.
pub const FONT_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&family=JetBrains+Mono:wght@400;500&display=swap";

/// Font CDN origin, preconnected from `<head>`.
pub const FONT_ORIGIN: &str = "https://fonts.gstatic.com";

/// Complete CSS for the page - tech-noir dark theme.
pub const PRISM_CSS: &str = r#"
:root {
    --font-inter: 'Inter', system-ui, -apple-system, sans-serif;
    --font-jetbrains-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --bg: #0E0E0E;
    --panel: rgba(18, 18, 18, 0.9);
    --panel-deep: rgba(17, 17, 17, 0.9);
    --white: #ffffff;
    --muted: #A1A1AA;
    --zinc-300: #d4d4d8;
    --zinc-400: #a1a1aa;
    --zinc-500: #71717a;
    --cyan: #4AF2EA;
    --pink: #EFA9B6;
    --yellow: #F3E68F;
    --line: rgba(255, 255, 255, 0.1);
    --line-strong: rgba(255, 255, 255, 0.15);
    --wash: rgba(255, 255, 255, 0.03);
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    min-height: 100vh;
    background: var(--bg);
    color: var(--white);
    font-family: var(--font-inter);
}

.antialiased {
    -webkit-font-smoothing: antialiased;
    -moz-osx-font-smoothing: grayscale;
}

a {
    color: inherit;
    text-decoration: none;
}

h1, h2, h3, h4, p {
    margin: 0;
}

/* Layout */

.page {
    position: relative;
}

.page-backdrop {
    position: absolute;
    inset: 0 0 auto 0;
    height: 420px;
    z-index: 0;
    background: radial-gradient(circle at top, rgba(243,230,143,0.18), transparent 60%);
    filter: blur(64px);
}

.page-main {
    position: relative;
    z-index: 10;
    max-width: 72rem;
    min-height: 100vh;
    margin: 0 auto;
    padding: 3rem 1.5rem 8rem;
    display: flex;
    flex-direction: column;
    gap: 7rem;
}

.glow-layer {
    position: absolute;
    inset: 0;
    pointer-events: none;
}

.framed {
    position: relative;
    overflow: hidden;
    border: 1px solid var(--line);
    border-radius: 40px;
    background: var(--wash);
    padding: 1px;
}

.framed-inner {
    position: relative;
    border-radius: 38px;
    background: var(--panel-deep);
    backdrop-filter: blur(24px);
    padding: 3rem 1.5rem;
}

/* Type */

.kicker {
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.4em;
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
}

.kicker-cyan { color: var(--cyan); }
.kicker-pink { color: var(--pink); }
.kicker-yellow { color: var(--yellow); }

.section-title {
    margin-top: 0.5rem;
    font-size: 1.875rem;
    font-weight: 600;
    color: var(--white);
}

.section-lede {
    max-width: 36rem;
    font-size: 0.875rem;
    line-height: 1.5rem;
    color: var(--muted);
}

.section-head {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.eyebrow {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    border-radius: 9999px;
    border: 1px solid var(--line);
    background: rgba(255, 255, 255, 0.06);
    padding: 0.5rem 1rem;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.3em;
    color: rgba(255, 255, 255, 0.8);
}

.eyebrow-cyan {
    border-color: rgba(74, 242, 234, 0.3);
    background: rgba(74, 242, 234, 0.1);
    color: var(--cyan);
    font-weight: 500;
}

/* Icons */

.icon { width: 1.25rem; height: 1.25rem; flex-shrink: 0; }
.icon-sm { width: 1rem; height: 1rem; flex-shrink: 0; }
.icon-lg { width: 2.5rem; height: 2.5rem; flex-shrink: 0; }
.tint-cyan { color: var(--cyan); }
.tint-pink { color: var(--pink); }
.tint-yellow { color: var(--yellow); }
.tint-ghost { color: rgba(255, 255, 255, 0.4); }

/* Buttons */

.pill {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    border-radius: 9999px;
    padding: 0.75rem 1.5rem;
    font-size: 0.875rem;
    font-weight: 500;
    transition: all 300ms;
}

.pill-primary {
    background: var(--yellow);
    color: var(--bg);
    box-shadow: 0 0 45px rgba(243,230,143,0.35);
}

.pill-primary:hover {
    background: #f5ebaa;
    box-shadow: 0 0 55px rgba(243,230,143,0.45);
}

.pill-secondary {
    border: 1px solid var(--line-strong);
    background: rgba(255, 255, 255, 0.05);
    color: var(--white);
}

.pill-secondary:hover {
    border-color: rgba(255, 255, 255, 0.3);
    background: rgba(255, 255, 255, 0.1);
}

/* Header */

.site-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1.5rem;
    border-radius: 9999px;
    border: 1px solid var(--line);
    background: rgba(0, 0, 0, 0.4);
    backdrop-filter: blur(16px);
    padding: 1rem 1.5rem;
}

.brand {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.brand-mark {
    position: relative;
    display: flex;
    align-items: center;
    justify-content: center;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 9999px;
    border: 1px solid var(--line-strong);
    background: rgba(255, 255, 255, 0.04);
}

.brand-prism {
    position: absolute;
    inset: 0.5rem;
    border-radius: 9999px;
    background: conic-gradient(from 120deg at 50% 50%, rgba(74,242,234,0.6), rgba(239,169,182,0.6), rgba(243,230,143,0.7), rgba(74,242,234,0.6));
}

.brand-letter {
    position: relative;
    font-size: 0.875rem;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    color: #000;
}

.brand-name {
    font-size: 0.875rem;
    text-transform: uppercase;
    letter-spacing: 0.4em;
    color: var(--zinc-400);
}

.brand-tagline {
    font-size: 0.75rem;
    color: var(--zinc-500);
}

.site-nav {
    display: none;
    align-items: center;
    gap: 2rem;
    font-size: 0.875rem;
    color: var(--zinc-400);
}

.site-nav a:hover {
    color: var(--white);
}

/* Hero */

.hero {
    display: flex;
    flex-direction: column;
    gap: 2.5rem;
    text-align: center;
}

.hero-copy {
    max-width: 48rem;
    margin: 0 auto;
}

.hero-title {
    margin-top: 1.5rem;
    font-size: 2.25rem;
    font-weight: 600;
    line-height: 1.25;
    text-wrap: balance;
}

.hero-lede {
    margin-top: 1.5rem;
    font-size: 1rem;
    line-height: 1.75rem;
    color: var(--muted);
    text-wrap: pretty;
}

.hero-actions {
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1rem;
}

.hero-panel {
    margin-top: 3.5rem;
    border-radius: 34px;
    padding: 0.25rem;
}

.hero-panel-inner {
    position: relative;
    border-radius: 32px;
    background: var(--panel);
    backdrop-filter: blur(24px);
    padding: 2.5rem;
    display: grid;
    gap: 2.5rem;
}

.hero-signal {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    text-align: left;
}

.chip {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    align-self: flex-start;
    border-radius: 9999px;
    border: 1px solid var(--line);
    background: rgba(0, 0, 0, 0.5);
    padding: 0.5rem 1rem;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.4em;
    color: rgba(255, 255, 255, 0.8);
}

.dot {
    width: 0.375rem;
    height: 0.375rem;
    border-radius: 9999px;
}

.dot-cyan { background: var(--cyan); }
.dot-yellow { background: var(--yellow); }

.pulse {
    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

@keyframes pulse {
    50% { opacity: 0.5; }
}

.hero-signal-copy {
    font-size: 1.125rem;
    color: var(--muted);
}

.stat-grid {
    display: grid;
    gap: 1rem;
}

.stat-tile {
    border-radius: 26px;
    border: 1px solid var(--line);
    background: var(--wash);
    padding: 1.25rem 1rem;
    text-align: left;
}

.stat-value {
    font-size: 1.5rem;
    font-weight: 600;
}

.stat-label {
    margin-top: 0.25rem;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.3em;
    color: var(--zinc-500);
}

.scan-card {
    position: relative;
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    border-radius: 30px;
    border: 1px solid var(--line);
    background: rgba(0, 0, 0, 0.7);
    padding: 1.5rem;
}

.scan-head {
    display: flex;
    align-items: center;
    justify-content: space-between;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.35em;
    color: var(--zinc-500);
}

.live {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: var(--cyan);
}

.readouts {
    margin-top: 2rem;
    display: grid;
    gap: 1.5rem;
}

.readout {
    display: flex;
    align-items: center;
    justify-content: space-between;
    border: 1px solid;
    border-radius: 24px;
    padding: 0.75rem 1rem;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.25em;
    text-align: left;
}

.scan-match {
    margin-top: 2.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    border-radius: 20px;
    border: 1px solid var(--line);
    background: rgba(255, 255, 255, 0.04);
    padding: 1rem;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.35em;
    color: rgba(255, 255, 255, 0.7);
}

.scan-match-tag {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    color: var(--pink);
}

/* Feature cards */

.card-grid {
    display: grid;
    gap: 2rem;
}

.glow-card {
    position: relative;
    overflow: hidden;
    border-radius: 28px;
    border: 1px solid var(--line);
    background: linear-gradient(to bottom right, rgba(255,255,255,0.04), rgba(255,255,255,0.02), transparent);
    padding: 1px;
}

.glow-card-inner {
    position: relative;
    height: 100%;
    border-radius: 26px;
    background: var(--panel);
    backdrop-filter: blur(24px);
    padding: 1.5rem;
}

.glow-card-halo {
    position: absolute;
    inset: -40%;
    transform: translateY(-40%);
    opacity: 0;
    filter: blur(64px);
    transition: opacity 700ms;
}

.glow-card:hover .glow-card-halo {
    opacity: 1;
}

.icon-badge {
    margin-bottom: 1rem;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 3rem;
    height: 3rem;
    border-radius: 9999px;
    border: 1px solid;
    background: rgba(255, 255, 255, 0.05);
    color: var(--white);
}

.card-title {
    font-size: 1.125rem;
    font-weight: 600;
    letter-spacing: -0.025em;
}

.card-body {
    margin-top: 0.75rem;
    font-size: 0.875rem;
    line-height: 1.5rem;
    color: var(--zinc-400);
}

/* Pipeline */

.phase-grid {
    margin-top: 3rem;
    display: grid;
    gap: 1.5rem;
}

.phase-card {
    position: relative;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    border-radius: 30px;
    border: 1px solid rgba(255, 255, 255, 0.08);
    background: rgba(17, 17, 17, 0.8);
    backdrop-filter: blur(24px);
    padding: 1.5rem;
    transition: all 500ms;
}

.phase-card:hover {
    border-color: var(--line-strong);
    box-shadow: 0 0 40px rgba(243,230,143,0.15);
}

.phase-id {
    font-size: 0.75rem;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.3em;
    color: var(--zinc-500);
    font-family: var(--font-jetbrains-mono);
}

.phase-head {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1.5rem;
}

.phase-title {
    font-size: 1.25rem;
    font-weight: 600;
    letter-spacing: -0.025em;
}

.phase-orb {
    display: none;
    width: 3rem;
    height: 3rem;
    border-radius: 9999px;
    border: 1px solid var(--line);
    background-color: rgba(255, 255, 255, 0.03);
}

.phase-summary {
    font-size: 0.875rem;
    line-height: 1.5rem;
    color: var(--muted);
}

.phase-details {
    font-size: 0.875rem;
    line-height: 1.75rem;
    color: var(--zinc-400);
}

.phase-rule {
    pointer-events: none;
    position: absolute;
    top: 0;
    left: 2.5rem;
    right: 2.5rem;
    height: 1px;
    background: linear-gradient(to right, transparent, rgba(255,255,255,0.3), transparent);
    opacity: 0.5;
}

/* Gallery */

.reel-grid {
    display: grid;
    gap: 1.5rem;
}

.reel-card {
    position: relative;
    overflow: hidden;
    border-radius: 32px;
    border: 1px solid var(--line);
    background: rgba(0, 0, 0, 0.6);
    backdrop-filter: blur(24px);
    padding: 1px;
}

.reel-card-inner {
    position: relative;
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    height: 100%;
    border-radius: 30px;
    background: var(--panel-deep);
    padding: 1.75rem;
}

.reel-glow {
    position: absolute;
    inset: 0;
    opacity: 0.45;
    transition: opacity 700ms;
}

.reel-card:hover .reel-glow {
    opacity: 1;
}

.reel-head {
    position: relative;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.reel-text {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    text-align: left;
}

.reel-title {
    font-size: 1.25rem;
    font-weight: 600;
}

.reel-body {
    font-size: 0.875rem;
    color: var(--zinc-400);
}

.tag-row {
    position: relative;
    margin-top: auto;
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
}

.tag {
    border-radius: 9999px;
    border: 1px solid var(--line);
    background: rgba(255, 255, 255, 0.06);
    padding: 0.5rem 1rem;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.25em;
    color: rgba(255, 255, 255, 0.7);
}

/* Security */

.security-inner {
    display: flex;
    flex-direction: column;
    gap: 2.5rem;
}

.security-copy {
    flex: 1;
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.security-body {
    max-width: 32rem;
    font-size: 0.875rem;
    line-height: 1.5rem;
    color: var(--zinc-400);
}

.trust-grid {
    display: grid;
    gap: 1rem;
}

.trust-row {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    border-radius: 24px;
    border: 1px solid var(--line);
    background: rgba(255, 255, 255, 0.04);
    padding: 1rem;
    font-size: 0.875rem;
    color: var(--zinc-300);
}

.trust-row .icon {
    margin-top: 0.25rem;
    color: var(--yellow);
}

.faceid {
    position: relative;
    flex: 1;
}

.faceid-ring {
    position: absolute;
    inset: 1.5rem;
    border-radius: 32px;
    border: 1px solid rgba(239, 169, 182, 0.4);
}

.faceid-card {
    position: relative;
    overflow: hidden;
    border-radius: 38px;
    border: 1px solid var(--line);
    background: rgba(0, 0, 0, 0.7);
    padding: 1.75rem;
}

.faceid-head {
    display: flex;
    align-items: center;
    justify-content: space-between;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.35em;
    color: var(--zinc-500);
}

.faceid-checks {
    margin-top: 2.5rem;
    display: grid;
    gap: 1.5rem;
}

.faceid-checks .readout {
    border-radius: 28px;
    padding: 1.25rem 1rem;
}

.audit-feed {
    margin-top: 2.5rem;
    border-radius: 28px;
    border: 1px solid var(--line);
    background: rgba(255, 255, 255, 0.04);
    padding: 1.25rem;
}

.audit-title {
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.3em;
    color: rgba(255, 255, 255, 0.7);
}

.audit-lines {
    margin-top: 1rem;
    display: grid;
    gap: 0.75rem;
    font-size: 0.875rem;
    color: var(--zinc-400);
    font-family: var(--font-jetbrains-mono);
}

/* Waitlist */

.waitlist {
    position: relative;
    overflow: hidden;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 2rem;
    border-radius: 38px;
    border: 1px solid var(--line);
    background: var(--wash);
    backdrop-filter: blur(24px);
    padding: 4rem 1.5rem;
    text-align: center;
}

.waitlist-inner {
    position: relative;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1.5rem;
}

.waitlist-title {
    max-width: 48rem;
    font-size: 1.875rem;
    font-weight: 600;
    text-wrap: balance;
}

.waitlist-form {
    position: relative;
    display: flex;
    flex-direction: column;
    gap: 1rem;
    width: 100%;
    max-width: 36rem;
}

.waitlist-input {
    height: 3.5rem;
    flex: 1;
    border-radius: 9999px;
    border: 1px solid var(--line-strong);
    background: rgba(0, 0, 0, 0.7);
    padding: 0 1.5rem;
    font-size: 0.875rem;
    color: var(--white);
}

.waitlist-input::placeholder {
    color: var(--zinc-500);
}

.waitlist-input:focus {
    outline: none;
    border-color: rgba(243, 230, 143, 0.6);
    box-shadow: 0 0 0 2px rgba(243, 230, 143, 0.4);
}

.waitlist-submit {
    height: 3.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border: 0;
    border-radius: 9999px;
    background: var(--yellow);
    padding: 0 2rem;
    font-size: 0.875rem;
    font-weight: 500;
    color: #000;
    cursor: pointer;
    transition: all 300ms;
}

.waitlist-submit:hover {
    background: #f5ebaa;
}

.waitlist-note {
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.35em;
    color: var(--zinc-500);
}

/* Breakpoints */

@media (min-width: 640px) {
    .page-main { padding-left: 2.5rem; padding-right: 2.5rem; }
    .hero-title { font-size: 3rem; }
    .hero-lede { font-size: 1.125rem; }
    .hero-actions { flex-direction: row; }
    .section-head { flex-direction: row; align-items: flex-end; justify-content: space-between; }
    .section-title, .waitlist-title { font-size: 2.25rem; }
    .stat-grid { grid-template-columns: repeat(3, 1fr); }
    .trust-grid { grid-template-columns: repeat(2, 1fr); }
    .waitlist-form { flex-direction: row; }
}

@media (min-width: 768px) {
    .site-nav { display: flex; }
    .hero-title { font-size: 3.75rem; }
    .hero-panel-inner { padding: 3rem; grid-template-columns: 1.4fr 1fr; align-items: center; }
    .card-grid, .phase-grid { grid-template-columns: repeat(3, 1fr); }
    .phase-card { padding: 2rem; }
    .phase-orb { display: flex; }
    .framed-inner { padding: 4rem 3.5rem; }
    .security-inner { flex-direction: row; align-items: center; gap: 4rem; }
    .trust-grid { grid-template-columns: repeat(3, 1fr); }
}

@media (min-width: 1024px) {
    .page-main { padding-left: 3.5rem; padding-right: 3.5rem; }
    .reel-grid { grid-template-columns: repeat(3, 1fr); }
}
"#;
