//! Global CSS styles for the invitation.
//!
//! Peach background, orange-pink-purple gradients, rounded cards and the
//! keyframes behind every entrance, float and confetti animation.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --peach: #fff7ed;
  --blush: #fdf2f8;
  --lavender: #faf5ff;

  /* Accents */
  --orange: #fb923c;
  --orange-deep: #ea580c;
  --pink: #f472b6;
  --pink-deep: #db2777;
  --purple: #c084fc;
  --purple-deep: #9333ea;
  --red: #f87171;
  --yellow: #facc15;
  --blue: #60a5fa;

  /* Text */
  --text-primary: #1f2937;
  --text-secondary: #4b5563;
  --text-muted: #9ca3af;
  --danger: #dc2626;

  /* Gradients */
  --party-gradient: linear-gradient(90deg, var(--orange), var(--pink), var(--purple));
  --page-gradient: linear-gradient(135deg, var(--peach), var(--blush) 50%, var(--lavender));

  /* Typography */
  --font-display: 'Poppins', 'Segoe UI', system-ui, sans-serif;
  --font-body: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 800ms cubic-bezier(0.22, 1, 0.36, 1);
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
}

body {
  font-family: var(--font-body);
  background: var(--page-gradient);
  color: var(--text-primary);
  line-height: 1.6;
  overflow: hidden;
}

/* === Landing === */
.landing {
  position: relative;
  height: 100vh;
  overflow-y: auto;
  overflow-x: hidden;
  scroll-behavior: smooth;
  background: var(--page-gradient);
}

.landing section {
  position: relative;
  z-index: 1;
  padding: 4rem 1.5rem;
  max-width: 1100px;
  margin: 0 auto;
}

.gradient-text {
  background: var(--party-gradient);
  background-size: 200% 200%;
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  animation: gradient-shift 3s linear infinite;
}

.section-header {
  font-family: var(--font-display);
  font-size: 2.5rem;
  font-weight: 800;
  text-align: center;
  margin-bottom: 2.5rem;
}

/* Once-only scroll reveal */
.reveal {
  opacity: 0;
  transform: translateY(50px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.reveal.visible {
  opacity: 1;
  transform: none;
}

.reveal .detail-card {
  opacity: 0;
  transform: translateY(30px) scale(0.95);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.reveal.visible .detail-card {
  opacity: 1;
  transform: none;
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  gap: 1.5rem;
}

.hero.reveal.visible {
  transform: none;
}

.hero-badge {
  display: inline-block;
  padding: 0.5rem 1.25rem;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.8);
  color: var(--orange-deep);
  font-weight: 600;
  box-shadow: 0 4px 20px rgba(251, 146, 60, 0.25);
}

.hero-title {
  font-family: var(--font-display);
  font-size: clamp(2.5rem, 8vw, 5rem);
  font-weight: 900;
  line-height: 1.1;
}

.hero-tagline {
  max-width: 40rem;
  font-size: 1.25rem;
  color: var(--text-secondary);
}

.honoree {
  font-weight: 700;
  color: var(--pink-deep);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  justify-content: center;
}

.hero-hints {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  color: var(--text-muted);
  font-size: 0.875rem;
}

.scroll-hint {
  background: none;
  border: none;
  color: var(--text-secondary);
  cursor: pointer;
  display: flex;
  flex-direction: column;
  align-items: center;
  font: inherit;
}

.scroll-chevron {
  font-size: 1.5rem;
  animation: bob 1.5s ease-in-out infinite;
}

/* === Floating decoration === */
.floating-icons {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 0;
}

.floating-icon {
  position: absolute;
  font-size: 1.75rem;
  opacity: 0.6;
  animation-name: float-wobble;
  animation-iteration-count: infinite;
  animation-timing-function: ease-in-out;
}

.cursor-follower {
  position: fixed;
  top: 0;
  left: 0;
  width: 24px;
  height: 24px;
  border-radius: 50%;
  background: var(--party-gradient);
  opacity: 0.6;
  pointer-events: none;
  z-index: 40;
  mix-blend-mode: multiply;
  transition: transform 80ms cubic-bezier(0.22, 1, 0.36, 1);
}

@media (max-width: 768px) {
  .cursor-follower { display: none; }
}

/* === Details === */
.detail-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 1.5rem;
}

.detail-card {
  background: rgba(255, 255, 255, 0.85);
  border-radius: 1.5rem;
  padding: 2rem;
  text-align: center;
  box-shadow: 0 10px 40px rgba(0, 0, 0, 0.06);
}

.detail-card:hover {
  transform: translateY(-6px) scale(1.02);
}

.detail-icon {
  width: 4rem;
  height: 4rem;
  margin: 0 auto 1rem;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 2rem;
}

.card-orange .detail-icon { background: linear-gradient(135deg, var(--orange), var(--red)); }
.card-pink .detail-icon { background: linear-gradient(135deg, var(--pink), var(--purple)); }
.card-blue .detail-icon { background: linear-gradient(135deg, var(--blue), #22d3ee); }

.detail-title {
  font-family: var(--font-display);
  font-size: 1.25rem;
  margin-bottom: 0.5rem;
}

.detail-content {
  color: var(--text-secondary);
  font-weight: 500;
}

/* === Features === */
.feature-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 2rem;
}

.feature-card {
  background: rgba(255, 255, 255, 0.9);
  border-radius: 1.5rem;
  padding: 2rem;
  box-shadow: 0 10px 40px rgba(0, 0, 0, 0.06);
}

.feature-card-head {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1.25rem;
  font-family: var(--font-display);
  font-size: 1.25rem;
}

.feature-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.875rem;
}

.feature-list li {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  color: var(--text-secondary);
}

.feature-icon {
  font-size: 1.25rem;
}

/* === CTA === */
.cta {
  text-align: center;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
}

.cta-title {
  font-family: var(--font-display);
  font-size: 3rem;
  font-weight: 800;
  color: var(--orange-deep);
}

.cta-body {
  max-width: 36rem;
  font-size: 1.125rem;
  color: var(--text-secondary);
}

.glow-pulse {
  animation: glow-pulse 2s ease-in-out infinite;
}

.landing-footer {
  text-align: center;
  padding: 2rem;
  color: var(--text-muted);
  font-size: 0.875rem;
}

/* === Buttons === */
.btn-primary, .btn-outline, .btn-ghost {
  border-radius: 9999px;
  padding: 0.75rem 1.5rem;
  font: 600 1rem var(--font-body);
  cursor: pointer;
  min-height: 48px;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast), opacity var(--transition-fast);
}

.btn-primary {
  border: none;
  color: white;
  background: var(--party-gradient);
  box-shadow: 0 8px 24px rgba(244, 114, 182, 0.35);
}

.btn-outline {
  background: white;
  color: var(--orange-deep);
  border: 2px solid var(--orange);
}

.btn-ghost {
  background: none;
  border: none;
  color: var(--text-secondary);
}

.btn-lg {
  padding: 1rem 2.25rem;
  font-size: 1.125rem;
}

.btn-primary:hover:not(:disabled), .btn-outline:hover:not(:disabled) {
  transform: scale(1.05);
}

.btn-primary:active:not(:disabled), .btn-outline:active:not(:disabled) {
  transform: scale(0.95);
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.icon-btn {
  background: none;
  border: none;
  color: white;
  font-size: 1.75rem;
  line-height: 1;
  cursor: pointer;
}

.close-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
  z-index: 2;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 45;
  background: rgba(17, 24, 39, 0.55);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  animation: fade-in 200ms ease;
}

.rsvp-modal {
  width: 95vw;
  max-width: 42rem;
  max-height: 90vh;
  overflow: hidden;
  border-radius: 1.5rem;
  background: var(--page-gradient);
  box-shadow: 0 25px 60px rgba(0, 0, 0, 0.25);
  animation: pop-in 300ms cubic-bezier(0.22, 1, 0.36, 1);
}

.rsvp-header {
  position: relative;
  overflow: hidden;
  padding: 1.5rem 2rem;
  color: white;
  background: var(--party-gradient);
}

.rsvp-header-dots {
  position: absolute;
  inset: 0;
  opacity: 0.2;
  background-image: radial-gradient(circle, white 1px, transparent 1px);
  background-size: 20px 20px;
  animation: drift 20s linear infinite alternate;
}

.rsvp-title-row {
  position: relative;
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 0.5rem;
}

.modal-title {
  font-family: var(--font-display);
  font-size: 1.5rem;
}

.modal-description {
  position: relative;
  color: #ffedd5;
}

.spin-slow {
  font-size: 2rem;
  animation: spin 3s linear infinite;
}

.step-progress {
  position: relative;
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 1.25rem;
}

.step-dot {
  width: 2rem;
  height: 0.5rem;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.3);
  animation: pop-in 300ms ease both;
}

.step-dot.lit {
  background: white;
}

.rsvp-body {
  padding: 1.5rem 2rem 2rem;
  max-height: 60vh;
  overflow-y: auto;
}

.rsvp-step {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.slide-in {
  animation: slide-in 300ms ease;
}

.step-heading {
  text-align: center;
}

.step-heading h3 {
  font-family: var(--font-display);
  font-size: 1.25rem;
}

.step-heading p {
  color: var(--text-secondary);
}

.modal-actions {
  display: flex;
  justify-content: space-between;
  gap: 1rem;
  margin-top: 2rem;
}

.error-text {
  margin-top: 1rem;
  color: var(--danger);
  font-size: 0.875rem;
  text-align: center;
}

.message-hint {
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* === Form fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.rise-in {
  animation: rise-in 400ms ease both;
}

.input-label {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-weight: 500;
  color: #374151;
}

.input-field {
  width: 100%;
  min-height: 48px;
  padding: 0.75rem 1rem;
  border-radius: 0.75rem;
  border: 2px solid;
  font: 1rem var(--font-body);
  background: white;
  color: var(--text-primary);
  outline: none;
  transition: border-color var(--transition-fast);
}

.input-field.textarea {
  resize: none;
}

.input-field.accent-orange { border-color: #fed7aa; }
.input-field.accent-orange:focus { border-color: var(--orange); }
.input-field.accent-pink { border-color: #fbcfe8; }
.input-field.accent-pink:focus { border-color: var(--pink); }
.input-field.accent-purple { border-color: #e9d5ff; }
.input-field.accent-purple:focus { border-color: var(--purple); }

.input-icon.accent-orange { color: var(--orange); }
.input-icon.accent-pink { color: var(--pink); }
.input-icon.accent-purple { color: var(--purple); }

/* Attendance cards */
.attendance-choice {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.attendance-card {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem 1.25rem;
  border-radius: 1rem;
  border: 2px solid #e5e7eb;
  background: white;
  cursor: pointer;
  transition: border-color var(--transition-fast), transform var(--transition-fast);
}

.attendance-card:hover {
  transform: scale(1.02);
}

.attendance-card.selected {
  border-color: var(--orange);
  background: var(--peach);
}

.attendance-card input {
  accent-color: var(--orange);
}

.attendance-emoji {
  font-size: 1.75rem;
}

.attendance-text {
  display: flex;
  flex-direction: column;
}

.attendance-text small {
  color: var(--text-secondary);
}

/* Guest stepper */
.guest-stepper {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 1rem;
  border-radius: 1rem;
  background: rgba(255, 255, 255, 0.7);
}

.stepper-row {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
}

.stepper-btn {
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  border: none;
  background: var(--party-gradient);
  color: white;
  font-size: 1.5rem;
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.stepper-btn:hover:not(:disabled) { transform: scale(1.1); }
.stepper-btn:active:not(:disabled) { transform: scale(0.9); }

.stepper-value {
  display: flex;
  flex-direction: column;
  align-items: center;
  min-width: 4rem;
}

.stepper-number {
  font-family: var(--font-display);
  font-size: 2rem;
  font-weight: 800;
  color: var(--orange-deep);
}

.stepper-caption {
  font-size: 0.75rem;
  color: var(--text-muted);
}

/* Success screen */
.rsvp-modal.success {
  max-width: 32rem;
  padding: 3rem 2rem;
  text-align: center;
}

.success-badge {
  width: 5rem;
  height: 5rem;
  margin: 0 auto 1.5rem;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 2.5rem;
  color: white;
  background: linear-gradient(90deg, #4ade80, #10b981);
  animation: pop-in 500ms cubic-bezier(0.34, 1.56, 0.64, 1) 200ms both;
}

.success-title {
  font-family: var(--font-display);
  font-size: 1.75rem;
  margin-bottom: 1rem;
}

.success-text {
  color: var(--text-secondary);
  font-size: 1.125rem;
}

.success-stars {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 1.5rem;
}

.success-star {
  font-size: 1.5rem;
  animation: twinkle 3s ease-in-out infinite;
}

/* === Confetti === */
.confetti-overlay {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: 50;
}

.confetti-piece {
  position: absolute;
  top: 0;
  line-height: 1;
  animation-name: confetti-fall;
  animation-timing-function: ease-in;
  animation-fill-mode: both;
}

.confetti-circle { border-radius: 50%; }
.confetti-triangle { width: 0; height: 0; }

.confetti-float {
  position: absolute;
  font-size: 2rem;
  animation-name: float-wobble;
  animation-iteration-count: infinite;
  animation-timing-function: ease-in-out;
}

/* === Keyframes === */
@keyframes confetti-fall {
  from { transform: translateY(-100px) rotate(0deg); opacity: 1; }
  to { transform: translateY(calc(100vh + 100px)) rotate(var(--spin)); opacity: 0; }
}

@keyframes float-wobble {
  0%, 100% { transform: translateY(0) rotate(0deg) scale(1); }
  33% { transform: translateY(-20px) rotate(10deg) scale(1.1); }
  66% { transform: translateY(-10px) rotate(-10deg) scale(1.05); }
}

@keyframes gradient-shift {
  0%, 100% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
}

@keyframes glow-pulse {
  0%, 100% { text-shadow: 0 0 0 rgba(0, 0, 0, 0); }
  50% { text-shadow: 0 0 20px rgba(255, 165, 0, 0.5); }
}

@keyframes bob {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(8px); }
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

@keyframes drift {
  from { background-position: 0% 0%; }
  to { background-position: 100% 100%; }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes pop-in {
  from { opacity: 0; transform: scale(0.8); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes slide-in {
  from { opacity: 0; transform: translateX(50px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes rise-in {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes twinkle {
  0%, 66%, 100% { transform: scale(1) rotate(0deg); }
  16% { transform: scale(1.2) rotate(180deg); }
  33% { transform: scale(1) rotate(360deg); }
}
"#;
