pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-full);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-normal) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
  box-shadow: var(--shadow-md);
}

.btn:active {
  transform: scale(0.95);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-secondary {
  background-color: var(--secondary);
  color: var(--text-inverse);
}

.btn-primary:hover,
.btn-secondary:hover {
  background-color: #000000;
}

.btn-outline {
  background-color: var(--surface);
  color: var(--text-primary);
  border: 1px solid var(--border);
}

/* Cards */
.card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-lg);
  overflow: hidden;
  transition: transform var(--transition-normal) var(--easing-standard),
              border-color var(--transition-normal) var(--easing-standard);
}

.card:hover {
  transform: translateY(-8px);
  border-color: rgba(239, 68, 68, 0.4);
}

/* Tags and badges */
.tag {
  display: inline-block;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--surface-muted);
  color: var(--text-secondary);
  font-size: 0.75rem;
}

.badge {
  position: absolute;
  top: var(--space-3);
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  font-size: 0.75rem;
  font-weight: 600;
  color: var(--text-inverse);
}

.badge-featured { left: var(--space-3); background-color: var(--primary); }
.badge-completed { right: var(--space-3); background-color: var(--success); }
.badge-progress { right: var(--space-3); background-color: #F59E0B; }

/* Form Elements */
.form-group {
  margin-bottom: var(--space-4);
}

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input,
.form-textarea {
  width: 100%;
  padding: var(--space-3) var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  color: var(--text-primary);
  transition: border-color var(--transition-fast) var(--easing-standard);
}

.form-input:focus,
.form-textarea:focus {
  border-color: var(--primary);
  outline: none;
}

.form-textarea {
  min-height: 140px;
  resize: vertical;
}

.form-banner {
  margin-top: var(--space-4);
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-lg);
  font-weight: 500;
}

.form-banner.success {
  background-color: rgba(16, 185, 129, 0.15);
  color: var(--success);
}

.form-banner.failure {
  background-color: rgba(239, 68, 68, 0.15);
  color: var(--error);
}

.form-notice {
  color: var(--error);
  font-size: 0.875rem;
}
"#;
