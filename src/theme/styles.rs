//! Global CSS styles for Event Easy.
//!
//! Every themed color is a custom property set on `.screen` from the active
//! palette, so the rules below are the same in light and dark mode.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Brand colors that never change with the theme */
  --accent: #ea580c;
  --brand-pink: #ec4899;
  --footer-bg: #1f2937;
  --footer-text: #d1d5db;
  --footer-rule: #374151;
  --divider: #f3f4f6;

  /* Typography */
  --font-sans: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-slide: 250ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  line-height: 1.5;
  min-height: 100vh;
}

button {
  font: inherit;
  border: none;
  cursor: pointer;
  background: none;
}

/* === Screen === */
.screen {
  display: flex;
  flex-direction: column;
  height: 100vh;
  background: var(--bg);
  transition: background var(--transition-fast);
}

.screen-scroll {
  flex: 1;
  overflow-y: auto;
}

/* === Navbar === */
.navbar {
  position: relative;
  z-index: 100;
  background: var(--navbar-bg);
}

.navbar-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 24px 16px 12px;
  border-bottom: 1px solid var(--divider);
}

.navbar-brand {
  display: flex;
  align-items: center;
  gap: 8px;
}

.brand-text {
  font-size: 22px;
  font-weight: bold;
  color: var(--accent);
}

.navbar-center {
  flex: 1;
  display: flex;
  justify-content: center;
}

.navbar-actions {
  display: flex;
  align-items: center;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  margin: 0 4px;
  padding: 4px;
  border-radius: 6px;
}

.icon-btn:hover {
  background: rgba(234, 88, 12, 0.08);
}

/* === Search Bar === */
.search-bar {
  display: flex;
  align-items: center;
  width: 90%;
  margin: 8px auto;
  padding: 8px;
  border: 1px solid var(--accent);
  border-radius: 24px;
  background: var(--navbar-bg);
}

.search-bar-icon {
  display: inline-flex;
  margin: 0 6px 0 16px;
}

.search-input {
  flex: 1;
  padding: 6px 8px;
  font-size: 14px;
  border: none;
  outline: none;
  background: transparent;
  color: var(--search-text);
}

.search-input::placeholder {
  color: var(--accent);
}

.close-btn {
  padding: 6px;
}

/* === Mobile Menu === */
.menu-overlay {
  position: fixed;
  inset: 0;
  z-index: 200;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  background: var(--scrim);
}

.menu-sheet {
  min-height: 300px;
  padding: 24px;
  border-radius: 18px 18px 0 0;
  background: var(--menu-sheet);
  animation: slide-up var(--transition-slide);
}

@keyframes slide-up {
  from { transform: translateY(100%); }
  to { transform: translateY(0); }
}

.menu-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 18px;
}

.menu-link {
  display: block;
  width: 100%;
  padding: 12px 0;
  text-align: left;
  font-size: 15px;
  font-weight: 500;
  color: var(--accent);
  border-bottom: 1px solid var(--divider);
}

/* === Hero === */
.hero {
  position: relative;
  height: 350px;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  background: var(--hero-bg);
}

.hero-image {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero-overlay {
  position: absolute;
  inset: 0;
}

.hero-content {
  position: relative;
  z-index: 2;
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 0 20px;
}

.hero-title {
  margin-bottom: 10px;
  font-size: 28px;
  font-weight: bold;
  text-align: center;
  color: var(--hero-title);
}

.hero-subtitle {
  margin-bottom: 20px;
  font-size: 16px;
  text-align: center;
  color: var(--hero-subtitle);
}

.hero-buttons {
  display: flex;
  gap: 12px;
}

/* === Buttons === */
.btn-primary,
.btn-secondary,
.btn-cta {
  padding: 10px 24px;
  border-radius: 24px;
  font-weight: bold;
  transition: transform var(--transition-fast);
}

.btn-primary:hover,
.btn-secondary:hover,
.btn-cta:hover {
  transform: translateY(-1px);
}

.btn-primary {
  background: var(--organize-btn);
  color: var(--organize-btn-text);
}

.btn-secondary {
  background: var(--find-btn);
  color: var(--find-btn-text);
}

.btn-card {
  width: 100%;
  margin-top: 8px;
  padding: 8px 0;
  border-radius: 16px;
  font-weight: bold;
  text-align: center;
  background: var(--event-btn);
  color: var(--event-btn-text);
}

.btn-cta {
  background: var(--cta-btn);
  color: var(--cta-btn-text);
}

/* === Sections === */
.section-title {
  margin: 32px 0 16px;
  font-size: 22px;
  font-weight: bold;
  text-align: center;
  color: var(--section-title);
}

.card-grid {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
}

/* === Features === */
.feature-card {
  width: 45%;
  margin: 8px;
  padding: 16px;
  border-radius: 12px;
  display: flex;
  flex-direction: column;
  align-items: center;
  background: var(--feature-card);
}

.feature-title {
  margin-top: 8px;
  font-size: 16px;
  font-weight: bold;
  color: var(--feature-title);
}

.feature-desc {
  margin-top: 4px;
  text-align: center;
  color: var(--feature-text);
}

/* === How It Works === */
.step-card {
  width: 30%;
  min-width: 110px;
  margin: 8px;
  padding: 16px;
  border-radius: 12px;
  display: flex;
  flex-direction: column;
  align-items: center;
  background: var(--step-card);
}

.step-circle {
  width: 36px;
  height: 36px;
  margin-bottom: 8px;
  border-radius: 18px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--step-circle);
}

.step-num {
  font-size: 18px;
  font-weight: bold;
  color: var(--step-num);
}

.step-title {
  margin-bottom: 4px;
  font-size: 15px;
  font-weight: bold;
  text-align: center;
  color: var(--step-title);
}

.step-desc {
  font-size: 13px;
  text-align: center;
  color: var(--step-text);
}

/* === Events === */
.event-card {
  width: 90%;
  margin: 8px;
  border-radius: 12px;
  overflow: hidden;
  background: var(--event-card);
}

.event-image {
  display: block;
  width: 100%;
  height: 140px;
  object-fit: cover;
}

.event-content {
  padding: 16px;
}

.event-row {
  display: flex;
  align-items: center;
  gap: 6px;
  margin-bottom: 4px;
}

.event-date {
  font-weight: bold;
  color: var(--event-accent);
}

.event-title {
  margin: 4px 0;
  font-size: 18px;
  font-weight: bold;
  color: var(--event-title);
}

.event-location {
  color: var(--event-location);
}

.event-price {
  margin: 6px 0;
  font-weight: bold;
  color: var(--event-price);
}

/* === Testimonials === */
.testimonial-card {
  width: 90%;
  margin: 8px;
  padding: 16px;
  border-radius: 12px;
  display: flex;
  flex-direction: column;
  align-items: center;
  background: var(--testimonial-card);
}

.testimonial-quote {
  margin-bottom: 8px;
  font-style: italic;
  text-align: center;
  color: var(--testimonial-quote);
}

.testimonial-name {
  font-weight: bold;
  color: var(--testimonial-name);
}

.testimonial-role {
  font-size: 12px;
  color: var(--testimonial-role);
}

/* === Call To Action === */
.cta {
  margin: 32px 16px 0;
  padding: 32px;
  border-radius: 16px;
  display: flex;
  flex-direction: column;
  align-items: center;
  background: var(--cta-bg);
}

.cta-title {
  margin-bottom: 8px;
  font-size: 22px;
  font-weight: bold;
  text-align: center;
  color: var(--cta-title);
}

.cta-subtitle {
  margin-bottom: 16px;
  font-size: 16px;
  text-align: center;
  color: var(--cta-subtitle);
}

/* === Footer === */
.footer {
  margin-top: 32px;
  padding: 32px 12px;
  background: var(--footer-bg);
}

.footer-sections {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  margin-bottom: 24px;
}

.footer-section {
  width: 48%;
  margin-bottom: 18px;
}

.footer-brand {
  display: flex;
  align-items: center;
  gap: 6px;
  margin-bottom: 8px;
}

.footer-title {
  margin-bottom: 6px;
  font-size: 16px;
  font-weight: bold;
  color: #fff;
}

.footer-text,
.footer-link {
  display: block;
  margin-bottom: 4px;
  font-size: 13px;
  text-align: left;
  color: var(--footer-text);
}

.footer-link.inert {
  cursor: default;
}

.footer-copyright {
  padding-top: 16px;
  border-top: 1px solid var(--footer-rule);
  text-align: center;
  font-size: 13px;
  color: var(--footer-text);
}

/* === Login Screens === */
.login-screen {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 16px;
  min-height: 100vh;
  padding: 24px;
}

.login-title {
  font-size: 24px;
  font-weight: bold;
  color: var(--accent);
}

.login-back {
  color: var(--accent);
  text-decoration: underline;
}
"#;
