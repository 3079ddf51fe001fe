//! Global CSS styles for the Bravonest site.
//!
//! Colours come from the custom properties emitted by [`super::theme_variables`].

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: 'Inter', system-ui, -apple-system, sans-serif;
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

.site-root {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  background: var(--background);
  color: var(--foreground);
  transition: background 0.3s ease, color 0.3s ease;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  max-width: 100%;
  display: block;
}

:focus-visible {
  outline: 2px solid var(--primary);
  outline-offset: 2px;
}

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  padding: 0;
  margin: -1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
  border: 0;
}

/* === Layout === */
.container {
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.narrow {
  max-width: 820px;
  margin-left: auto;
  margin-right: auto;
}

.centered {
  text-align: center;
}

.site-main {
  flex: 1;
}

.lead {
  font-size: 1.125rem;
  color: var(--muted-foreground);
}

.prose p + p {
  margin-top: 1rem;
}

.text-gradient {
  background: linear-gradient(90deg, var(--primary), var(--secondary), var(--accent));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

/* === Custom Cursor === */
.custom-cursor,
.custom-cursor a,
.custom-cursor button,
.custom-cursor [data-cursor] {
  cursor: none;
}

.cursor-dot,
.cursor-outline {
  position: fixed;
  top: 0;
  left: 0;
  pointer-events: none;
  border-radius: 50%;
  z-index: 9999;
  transition: opacity 0.2s ease, width 0.2s ease, height 0.2s ease;
}

.cursor-dot {
  width: 8px;
  height: 8px;
  margin: -4px 0 0 -4px;
  background: var(--primary);
}

.cursor-outline {
  width: 36px;
  height: 36px;
  margin: -18px 0 0 -18px;
  border: 2px solid var(--primary);
  opacity: 0.5;
}

.cursor-outline.hovering {
  width: 56px;
  height: 56px;
  margin: -28px 0 0 -28px;
  background: color-mix(in srgb, var(--primary) 12%, transparent);
}

.cursor-dot.hidden,
.cursor-outline.hidden {
  opacity: 0;
}

/* === Header === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 50;
  background: color-mix(in srgb, var(--background) 85%, transparent);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--border);
}

.header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 4rem;
}

.logo {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-weight: 700;
  font-size: 1.25rem;
}

.logo-img {
  height: 2.25rem;
  width: auto;
}

.logo-fallback .logo-img {
  display: none;
}

.desktop-nav {
  display: flex;
  gap: 0.25rem;
}

.nav-link {
  padding: 0.5rem 0.875rem;
  border-radius: 0.5rem;
  font-size: 0.9375rem;
  font-weight: 500;
  color: var(--muted-foreground);
  transition: color 0.2s ease, background 0.2s ease;
}

.nav-link:hover {
  color: var(--foreground);
  background: var(--muted);
}

.nav-link.active {
  color: var(--primary);
  background: color-mix(in srgb, var(--primary) 10%, transparent);
}

.header-actions {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 0.5rem;
  border: 1px solid var(--border);
  background: transparent;
  color: var(--foreground);
  font-size: 1.125rem;
  cursor: pointer;
  transition: background 0.2s ease;
}

.icon-btn:hover {
  background: var(--muted);
}

.theme-toggle[aria-pressed="true"] {
  border-color: var(--primary);
}

.menu-btn {
  display: none;
}

/* === Mobile Drawer === */
.drawer {
  position: fixed;
  inset: 0;
  z-index: 100;
  visibility: hidden;
  pointer-events: none;
}

.drawer.open {
  visibility: visible;
  pointer-events: auto;
}

.drawer-backdrop {
  position: absolute;
  inset: 0;
  background: rgba(2, 6, 23, 0.5);
  opacity: 0;
  transition: opacity 0.3s ease;
}

.drawer.open .drawer-backdrop {
  opacity: 1;
}

.drawer-panel {
  position: absolute;
  top: 0;
  right: 0;
  bottom: 0;
  width: min(320px, 85vw);
  padding: 1.25rem;
  background: var(--card);
  border-left: 1px solid var(--border);
  transform: translateX(100%);
  transition: transform 0.3s ease;
}

.drawer.open .drawer-panel {
  transform: translateX(0);
}

.drawer-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1.5rem;
}

.drawer-title {
  font-weight: 600;
}

.drawer-nav {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.drawer-item {
  padding: 0.75rem 1rem;
  border-radius: 0.5rem;
  font-weight: 500;
  opacity: 0;
  transform: translateX(1.5rem);
  transition: opacity 0.3s ease, transform 0.3s ease, background 0.2s ease;
}

.drawer.open .drawer-item {
  opacity: 1;
  transform: translateX(0);
}

.drawer-item:hover,
.drawer-item.active {
  background: var(--muted);
}

/* === Hero === */
.hero {
  position: relative;
  overflow: hidden;
  padding: 7rem 0 5rem;
}

.hero-glow {
  position: absolute;
  width: 480px;
  height: 480px;
  border-radius: 50%;
  filter: blur(120px);
  opacity: 0.25;
  pointer-events: none;
}

.hero-glow-left {
  top: -120px;
  left: -160px;
  background: var(--primary);
}

.hero-glow-right {
  bottom: -160px;
  right: -120px;
  background: var(--secondary);
}

.hero-inner {
  position: relative;
  text-align: center;
}

.hero-title {
  font-size: clamp(2.25rem, 5vw, 4rem);
  font-weight: 800;
  line-height: 1.1;
  letter-spacing: -0.02em;
}

.hero-target-line {
  display: block;
  min-height: 1.1em;
}

.typing-caret {
  display: inline-block;
  width: 3px;
  height: 0.9em;
  margin-left: 4px;
  vertical-align: -0.05em;
  background: var(--primary);
  animation: caret-blink 1s step-end infinite;
}

.typing-caret.done {
  animation: none;
  opacity: 0;
  transition: opacity 0.6s ease 0.8s;
}

@keyframes caret-blink {
  50% { opacity: 0; }
}

.hero-subtitle {
  max-width: 680px;
  margin: 1.5rem auto 0;
  opacity: 0;
  transform: translateY(12px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

.hero-subtitle.shown {
  opacity: 1;
  transform: translateY(0);
}

.hero-lead {
  font-size: 1.25rem;
  color: var(--muted-foreground);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
  margin-top: 2.5rem;
}

.hero-features {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 1.25rem;
  margin-top: 4rem;
  text-align: left;
}

/* === Scrolling Reel === */
.reel {
  overflow: hidden;
  margin-top: 3rem;
  mask-image: linear-gradient(90deg, transparent, #000 10%, #000 90%, transparent);
}

.reel-track {
  display: flex;
  width: max-content;
  animation: reel-scroll 20s linear infinite;
}

.reel-item {
  padding-right: 3rem;
  white-space: nowrap;
  font-weight: 600;
  color: var(--muted-foreground);
}

@keyframes reel-scroll {
  from { transform: translateX(0); }
  to { transform: translateX(-50%); }
}

/* === Buttons === */
.cta,
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border-radius: 0.625rem;
  font-weight: 600;
  cursor: pointer;
  border: 1px solid transparent;
  transition: transform 0.2s ease, box-shadow 0.2s ease, background 0.2s ease;
}

.cta {
  padding: 0.875rem 1.75rem;
  font-size: 1rem;
}

.btn {
  padding: 0.625rem 1.25rem;
  font-size: 0.9375rem;
}

.cta-primary,
.btn-primary {
  background: linear-gradient(90deg, var(--primary), var(--secondary));
  color: #ffffff;
}

.cta-primary:hover,
.btn-primary:hover {
  transform: translateY(-2px);
  box-shadow: 0 10px 24px color-mix(in srgb, var(--primary) 30%, transparent);
}

.cta-secondary,
.btn-outline {
  background: transparent;
  border-color: var(--border);
  color: var(--foreground);
}

.cta-secondary:hover,
.btn-outline:hover {
  background: var(--muted);
}

.btn-ghost {
  background: transparent;
  color: var(--foreground);
}

.btn-ghost:hover {
  background: var(--muted);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
  transform: none;
}

.btn-block,
.wide {
  width: 100%;
}

.interactive-btn {
  position: relative;
  overflow: hidden;
}

.interactive-btn::before {
  content: '';
  position: absolute;
  inset: 0;
  background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.25), transparent);
  transform: translateX(-100%);
  transition: transform 0.6s ease;
}

.interactive-btn:hover::before {
  transform: translateX(100%);
}

.interactive-btn-label {
  position: relative;
}

/* === Cards === */
.card,
.feature-card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 1rem;
  padding: 1.5rem;
}

.card-grid {
  display: grid;
  gap: 1.5rem;
}

.card-grid.cols-2 { grid-template-columns: repeat(2, 1fr); }
.card-grid.cols-3 { grid-template-columns: repeat(3, 1fr); }
.card-grid.cols-4 { grid-template-columns: repeat(4, 1fr); }

.card-top {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 0.75rem;
}

.card-title {
  font-size: 1.125rem;
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.card-title.large {
  font-size: 1.5rem;
}

.card-description {
  color: var(--muted-foreground);
}

.hover-lift {
  transition: transform 0.25s ease, box-shadow 0.25s ease;
}

.hover-lift:hover {
  transform: translateY(-4px);
  box-shadow: 0 16px 32px rgba(15, 23, 42, 0.12);
}

.feature-icon,
.highlight-icon {
  font-size: 2rem;
  margin-bottom: 0.75rem;
}

.feature-title {
  font-size: 1.125rem;
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.feature-description {
  color: var(--muted-foreground);
  font-size: 0.9375rem;
}

.feature-points {
  margin-top: 1rem;
  list-style: none;
}

.checklist li {
  position: relative;
  padding-left: 1.5rem;
  margin-top: 0.375rem;
}

.checklist li::before {
  content: '\2713';
  position: absolute;
  left: 0;
  color: var(--primary);
  font-weight: 700;
}

.tilt-card {
  transform-style: preserve-3d;
  will-change: transform;
}

.tilt-card .feature-card {
  height: 100%;
  transition: transform 0.15s ease-out, box-shadow 0.3s ease;
}

.badge {
  display: inline-block;
  padding: 0.125rem 0.625rem;
  border-radius: 999px;
  font-size: 0.75rem;
  font-weight: 600;
  background: color-mix(in srgb, var(--primary) 12%, transparent);
  color: var(--primary);
}

.badge-secondary {
  background: color-mix(in srgb, var(--secondary) 12%, transparent);
  color: var(--secondary);
}

.avatar {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 4rem;
  height: 4rem;
  margin: 0 auto 1rem;
  border-radius: 50%;
  font-weight: 700;
  color: #ffffff;
  background: linear-gradient(135deg, var(--primary), var(--secondary));
}

.team-card {
  text-align: center;
}

.team-role {
  color: var(--primary);
  font-size: 0.875rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.course-duration {
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

/* === Scroll Reveal === */
.reveal {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity 0.7s ease, transform 0.7s ease;
}

.reveal.visible {
  opacity: 1;
  transform: translateY(0);
}

/* === Sections === */
.page-section {
  padding: 5rem 0;
}

.page-section.muted {
  background: var(--muted);
}

.section-header {
  margin-bottom: 3rem;
}

.section-header.centered {
  text-align: center;
}

.section-eyebrow {
  display: inline-block;
  margin-bottom: 0.5rem;
  font-size: 0.8125rem;
  font-weight: 700;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--primary);
}

.section-title {
  font-size: clamp(1.75rem, 3vw, 2.5rem);
  font-weight: 800;
  letter-spacing: -0.01em;
}

.section-subtitle {
  max-width: 640px;
  margin-top: 0.75rem;
  color: var(--muted-foreground);
}

.section-header.centered .section-subtitle {
  margin-left: auto;
  margin-right: auto;
}

.page-hero {
  padding: 6rem 0 4rem;
  text-align: center;
  background: linear-gradient(180deg, color-mix(in srgb, var(--primary) 8%, transparent), transparent);
}

.page-hero-title {
  font-size: clamp(2rem, 4.5vw, 3.25rem);
  font-weight: 800;
  line-height: 1.15;
}

.page-hero-subtitle {
  max-width: 680px;
  margin: 1.25rem auto 0;
  font-size: 1.125rem;
  color: var(--muted-foreground);
}

.cta-banner {
  text-align: center;
  background: linear-gradient(135deg, color-mix(in srgb, var(--primary) 14%, transparent), color-mix(in srgb, var(--secondary) 14%, transparent));
}

.cta-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
  margin-top: 2rem;
}

/* === Process Timeline === */
.process-steps {
  display: flex;
  align-items: center;
  justify-content: center;
  flex-wrap: wrap;
  gap: 1rem;
}

.process-step {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  min-width: 7rem;
}

.process-number {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  font-weight: 700;
  color: #ffffff;
  background: linear-gradient(135deg, var(--primary), var(--secondary));
}

.process-label {
  font-weight: 600;
}

.connector-arrow {
  color: var(--muted-foreground);
  font-size: 1.5rem;
}

/* === FAQ === */
.faq {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.faq-item {
  border: 1px solid var(--border);
  border-radius: 0.75rem;
  background: var(--card);
}

.faq-question {
  padding: 1rem 1.25rem;
  font-weight: 600;
  cursor: pointer;
  list-style: none;
}

.faq-question::-webkit-details-marker {
  display: none;
}

.faq-item[open] .faq-question {
  color: var(--primary);
}

.faq-answer {
  padding: 0 1.25rem 1rem;
  color: var(--muted-foreground);
}

/* === Tabs === */
.tabs {
  display: inline-flex;
  gap: 0.25rem;
  padding: 0.25rem;
  margin-bottom: 1.5rem;
  border-radius: 0.75rem;
  background: var(--muted);
}

.tab {
  padding: 0.5rem 1.25rem;
  border: none;
  border-radius: 0.5rem;
  background: transparent;
  color: var(--muted-foreground);
  font-weight: 600;
  cursor: pointer;
}

.tab.active {
  background: var(--card);
  color: var(--foreground);
  box-shadow: 0 1px 3px rgba(15, 23, 42, 0.1);
}

.tab-panel {
  animation: fade-in 0.3s ease;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* === Forms === */
.enquiry-form {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.375rem;
}

.input-label {
  font-size: 0.875rem;
  font-weight: 600;
}

.input-required {
  color: var(--destructive);
}

.input-hint {
  font-weight: 400;
  color: var(--muted-foreground);
}

.input-field {
  width: 100%;
  padding: 0.625rem 0.875rem;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  background: var(--background);
  color: var(--foreground);
  font: inherit;
  transition: border-color 0.2s ease, box-shadow 0.2s ease;
}

.input-field:focus {
  outline: none;
  border-color: var(--primary);
  box-shadow: 0 0 0 3px color-mix(in srgb, var(--primary) 20%, transparent);
}

.input-field.invalid {
  border-color: var(--destructive);
}

.textarea {
  resize: vertical;
  min-height: 6rem;
}

.field-error {
  font-size: 0.8125rem;
  color: var(--destructive);
}

.register-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
  align-items: start;
}

/* === Toasts === */
.toast-viewport {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 200;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  width: min(380px, calc(100vw - 3rem));
  list-style: none;
}

.toast {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  padding: 1rem 1.25rem;
  border-radius: 0.75rem;
  border: 1px solid var(--border);
  background: var(--card);
  box-shadow: 0 12px 28px rgba(15, 23, 42, 0.18);
  animation: toast-in 0.3s ease;
}

.toast-destructive {
  border-color: var(--destructive);
  background: color-mix(in srgb, var(--destructive) 10%, var(--card));
}

.toast-body {
  flex: 1;
}

.toast-title {
  font-weight: 700;
}

.toast-description {
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

.toast-close {
  border: none;
  background: transparent;
  color: var(--muted-foreground);
  font-size: 1.25rem;
  line-height: 1;
  cursor: pointer;
}

@keyframes toast-in {
  from { opacity: 0; transform: translateY(12px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Footer === */
.site-footer {
  padding: 4rem 0 2rem;
  border-top: 1px solid var(--border);
  background: var(--muted);
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr 1fr;
  gap: 2rem;
}

.footer-brand p,
.footer-column a,
.footer-column span {
  display: block;
  margin-top: 0.5rem;
  color: var(--muted-foreground);
  font-size: 0.9375rem;
}

.footer-column h4 {
  font-size: 0.9375rem;
  font-weight: 700;
}

.footer-column a:hover {
  color: var(--primary);
}

.footer-copyright {
  margin-top: 3rem;
  text-align: center;
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

/* === Not Found === */
.not-found {
  padding: 8rem 0;
  text-align: center;
}

/* === Responsive === */
@media (max-width: 1024px) {
  .hero-features,
  .card-grid.cols-4 {
    grid-template-columns: repeat(2, 1fr);
  }

  .card-grid.cols-3 {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (max-width: 768px) {
  .desktop-nav {
    display: none;
  }

  .menu-btn {
    display: inline-flex;
  }

  .hero {
    padding: 5rem 0 3.5rem;
  }

  .hero-features,
  .card-grid.cols-2,
  .card-grid.cols-3,
  .card-grid.cols-4,
  .register-grid,
  .footer-grid {
    grid-template-columns: 1fr;
  }

  .connector-arrow {
    transform: rotate(90deg);
  }

  .process-steps {
    flex-direction: column;
  }

  .page-section {
    padding: 3.5rem 0;
  }
}

@media (prefers-reduced-motion: reduce) {
  .reveal,
  .hero-subtitle,
  .drawer-item,
  .drawer-panel {
    transition: none;
  }

  .reel-track,
  .typing-caret {
    animation: none;
  }
}
"#;
