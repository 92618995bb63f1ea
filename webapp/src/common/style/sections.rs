pub const SECTION_STYLES: &str = r#"
/* Page Sections */

.section {
  width: 100%;
  padding: var(--space-20) var(--space-6);
  background-color: var(--surface);
  color: var(--text-primary);
  transition: background-color var(--transition-slow) var(--easing-standard),
              color var(--transition-slow) var(--easing-standard);
}

.section-inner {
  max-width: var(--container-width);
  margin: 0 auto;
}

.section-header {
  text-align: center;
  margin-bottom: var(--space-16);
}

.section-eyebrow {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  color: var(--primary);
  font-size: 0.875rem;
  font-weight: 500;
}

.section-eyebrow::before {
  content: "";
  width: 12px;
  height: 12px;
  border-radius: var(--radius-full);
  background-color: var(--primary);
}

.section-title {
  font-family: 'Lora', serif;
  font-size: 2.75rem;
  font-weight: 500;
  margin: var(--space-4) 0 var(--space-6);
}

.section-title .accent {
  color: var(--primary);
}

.section-lead {
  max-width: 48rem;
  margin: 0 auto;
  color: var(--text-secondary);
  font-size: 1.125rem;
  font-weight: 300;
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: var(--space-8);
}

/* Navigation */
.app-header {
  width: 100%;
  height: var(--header-height);
  padding: 0 var(--space-12);
  margin-top: var(--space-3);
  position: relative;
  z-index: 50;
}

.nav-container {
  display: flex;
  height: 100%;
  align-items: center;
  justify-content: space-between;
}

.logo {
  font-size: 2.25rem;
  font-weight: 700;
  user-select: none;
}

.logo .accent {
  color: #F87171;
}

.nav-links {
  display: flex;
  gap: var(--space-8);
  padding: var(--space-2) var(--space-12);
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  backdrop-filter: blur(24px);
  box-shadow: var(--shadow-md);
  font-family: 'Lora', serif;
  font-size: 1.25rem;
}

.nav-link {
  color: var(--text-primary);
  text-decoration: none;
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover,
.nav-link.active {
  color: var(--primary);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.icon-button {
  background: none;
  border: none;
  font-size: 1.5rem;
  cursor: pointer;
  color: var(--text-primary);
}

.menu-button {
  display: none;
}

.mobile-menu {
  display: none;
  position: relative;
  margin-top: var(--space-4);
  padding: var(--space-4) var(--space-6);
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-md);
  text-align: center;
}

.mobile-menu .nav-link {
  display: block;
  padding: var(--space-2) 0;
  font-size: 1.125rem;
}

.mobile-menu .close {
  position: absolute;
  top: var(--space-4);
  right: var(--space-4);
}

@media (max-width: 768px) {
  .app-header { padding: 0 var(--space-4); }
  .nav-links, .nav-actions .resume { display: none; }
  .menu-button { display: block; }
  .mobile-menu.open { display: block; }
}

/* Hero */
.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-6);
  padding-top: var(--header-height);
  text-align: center;
}

.hero-portrait {
  width: 12vw;
  min-width: 140px;
  aspect-ratio: 1;
  border-radius: var(--radius-full);
  overflow: hidden;
  box-shadow: var(--shadow-lg);
}

.hero-portrait img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero-greeting .accent {
  color: var(--primary);
}

.hero-title {
  font-family: 'Lora', serif;
  font-size: 2.25rem;
  font-weight: 500;
  max-width: 32rem;
  margin: var(--space-3) auto 0;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-4);
  margin-top: var(--space-6);
}

/* About */
.about-body {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-8);
}

.info-card {
  padding: var(--space-6);
}

.info-card .icon {
  color: var(--primary);
  font-size: 1.5rem;
  margin-bottom: var(--space-4);
}

.info-card ul {
  list-style: disc;
  padding-left: var(--space-6);
  color: var(--text-secondary);
}

.tools {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-4);
}

.tool {
  width: 80px;
  height: 80px;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-lg);
  background-color: var(--surface-muted);
  font-size: 0.7rem;
}

.tool img {
  width: 32px;
  height: 32px;
}

/* Services and projects */
.card-image {
  position: relative;
  height: 200px;
}

.card-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.card-body {
  padding: var(--space-6);
}

.card-body h3 {
  font-family: 'Lora', serif;
  font-size: 1.25rem;
  margin-bottom: var(--space-3);
}

.card-body p {
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.card-tags {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-top: var(--space-4);
}

.card-links {
  display: flex;
  gap: var(--space-4);
  margin-top: var(--space-4);
}

.filter-bar {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-4);
  margin-bottom: var(--space-12);
}

.filter-btn {
  padding: var(--space-2) var(--space-6);
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background-color: var(--surface);
  color: var(--text-primary);
  cursor: pointer;
}

.filter-btn.active {
  background-color: var(--primary);
  border-color: var(--primary);
  color: var(--text-inverse);
}

.empty-state {
  text-align: center;
  color: var(--text-secondary);
  padding: var(--space-12) 0;
}

/* Hackathon timeline */
.stats-grid {
  display: flex;
  justify-content: center;
  gap: var(--space-12);
  margin-bottom: var(--space-16);
}

.stat-value {
  font-size: 2rem;
  font-weight: 700;
  color: var(--primary);
}

.stat-label {
  color: var(--text-secondary);
}

.timeline {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: var(--space-8);
  border-left: 2px solid var(--border);
  padding-left: var(--space-8);
}

.timeline-entry {
  position: relative;
  padding: var(--space-6);
}

.timeline-entry .marker {
  position: absolute;
  left: calc(-1 * var(--space-12));
  top: var(--space-6);
  font-size: 1.5rem;
}

.timeline-meta {
  display: flex;
  gap: var(--space-4);
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.timeline-entry ul {
  list-style: disc;
  padding-left: var(--space-6);
  margin-top: var(--space-3);
}

/* Contact */
.contact-layout {
  display: grid;
  grid-template-columns: 1fr 2fr;
  gap: var(--space-12);
}

.contact-links a {
  display: block;
  padding: var(--space-2) 0;
  color: var(--text-primary);
}

.contact-form {
  padding: var(--space-8);
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-4);
}

@media (max-width: 768px) {
  .contact-layout, .form-row { grid-template-columns: 1fr; }
}

/* Footer */
.site-footer {
  padding: var(--space-8) var(--space-6);
  text-align: center;
  color: var(--text-secondary);
  background-color: var(--surface);
}
"#;
