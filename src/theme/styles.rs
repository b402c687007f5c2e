//! Global CSS styles for Heartseal.
//!
//! Colors come from the palette variables declared by `palette_css`.

pub const GLOBAL_STYLES: &str = r#"
/* === Typography & Motion === */
:root {
  --font-serif: 'Cormorant Garamond', 'Playfair Display', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;
  --font-script: 'Great Vibes', 'Brush Script MT', cursive;
  --ease-gentle: cubic-bezier(0.4, 0, 0.2, 1);
  --ease-spring: cubic-bezier(0.34, 1.56, 0.64, 1);
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
  font-family: var(--font-sans);
  background: var(--blush);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
  overflow-x: hidden;
}

.app {
  min-height: 100vh;
}

.page {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 2rem 1.5rem;
  gap: 1.5rem;
  text-align: center;
}

.eyebrow {
  font-size: 0.75rem;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--rose);
}

.accent {
  color: var(--rose);
}

/* === Cards === */
.card {
  width: 100%;
  max-width: 28rem;
  background: var(--paper);
  border: 1px solid var(--rose-soft);
  border-radius: 1.5rem;
  padding: 2.5rem 2rem;
  box-shadow: 0 20px 50px var(--rose-glow);
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.card-header {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.card-title {
  font-family: var(--font-serif);
  font-size: 2rem;
  font-weight: 600;
  color: var(--ink);
}

.card-subtitle {
  color: var(--ink-soft);
  font-size: 0.95rem;
}

/* === Buttons === */
.btn-primary,
.btn-rose,
.btn-shy,
.btn-ghost {
  font-family: var(--font-sans);
  font-size: 1rem;
  font-weight: 600;
  border-radius: 999px;
  padding: 0.85rem 2rem;
  cursor: pointer;
  border: 1px solid transparent;
  transition: transform 300ms var(--ease-spring), background 150ms ease, box-shadow 150ms ease;
}

.btn-primary {
  background: var(--ink);
  color: var(--paper);
}

.btn-primary:hover:not(:disabled) {
  background: var(--rose-deep);
}

.btn-rose {
  background: var(--rose);
  color: var(--paper);
  box-shadow: 0 10px 30px var(--rose-glow);
  letter-spacing: 0.1em;
}

.btn-rose:hover:not(:disabled) {
  background: var(--rose-deep);
}

.btn-shy {
  background: var(--paper);
  color: var(--ink-soft);
  border-color: var(--rose-soft);
  white-space: nowrap;
}

.btn-ghost {
  background: transparent;
  color: var(--ink-soft);
}

.btn-ghost:hover:not(:disabled) {
  color: var(--rose);
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.wide {
  width: 100%;
}

/* === Form Fields === */
.form-field {
  width: 100%;
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  text-align: left;
}

.input-label {
  font-size: 0.75rem;
  letter-spacing: 0.15em;
  text-transform: uppercase;
  color: var(--ink-soft);
}

.input-hint {
  text-transform: none;
  letter-spacing: normal;
  color: var(--ink-faint);
}

.input-field {
  width: 100%;
  font-family: var(--font-sans);
  font-size: 1rem;
  color: var(--ink);
  background: var(--blush);
  border: 1px solid var(--rose-soft);
  border-radius: 0.75rem;
  padding: 0.75rem 1rem;
  outline: none;
  transition: border-color 150ms ease, box-shadow 150ms ease;
}

.input-field:focus {
  border-color: var(--rose);
  box-shadow: 0 0 0 3px var(--rose-glow);
}

.input-field.invalid {
  border-color: var(--rose-deep);
  animation: shake 400ms var(--ease-gentle);
}

.input-field.textarea {
  font-family: var(--font-serif);
  font-size: 1.2rem;
  resize: none;
}

.form-error {
  color: var(--rose-deep);
  font-size: 0.875rem;
}

/* === Setup === */
.link-row {
  width: 100%;
  display: flex;
  align-items: flex-end;
  gap: 0.5rem;
}

.link-field {
  font-size: 0.8rem;
  color: var(--ink-soft);
}

.notice {
  font-size: 0.85rem;
  color: var(--rose);
}

.notice.warn {
  color: var(--ink-soft);
}

/* === Memory Lane === */
.memory-lane {
  background: var(--ink);
  color: var(--paper);
  overflow: hidden;
}

.story-progress {
  position: absolute;
  top: 1.5rem;
  left: 1.5rem;
  right: 1.5rem;
  display: flex;
  gap: 0.4rem;
}

.story-bar {
  flex: 1;
  height: 3px;
  border-radius: 2px;
  background: var(--ink-soft);
  overflow: hidden;
}

.story-bar-fill {
  height: 100%;
  background: var(--paper);
}

.slide {
  max-width: 40rem;
  opacity: 1;
  transform: translateY(0);
  transition: opacity 1s var(--ease-gentle), transform 1s var(--ease-gentle);
}

.slide.fading {
  opacity: 0;
  transform: translateY(-1rem);
}

.slide-text {
  font-family: var(--font-serif);
  font-size: 2.25rem;
  font-style: italic;
  line-height: 1.3;
}

.lane-footer {
  position: absolute;
  bottom: 2rem;
  font-size: 0.7rem;
  letter-spacing: 0.4em;
  text-transform: uppercase;
  color: var(--ink-faint);
}

.skip-intro {
  position: absolute;
  top: 3rem;
  right: 1.5rem;
  font-size: 0.8rem;
  color: var(--ink-faint);
}

.floating-hearts {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.floating-heart {
  position: absolute;
  color: var(--rose);
  opacity: 0.2;
  animation-name: drift;
  animation-iteration-count: infinite;
  animation-timing-function: ease-in-out;
}

/* === Proposal === */
.proposal-page {
  overflow: hidden;
}

.proposal-page.intro,
.proposal-page.accepting {
  background: var(--paper);
}

.intro-caption {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  font-style: italic;
  color: var(--ink-soft);
}

.intro-caption.countdown {
  font-size: 5rem;
  font-style: normal;
  color: var(--rose);
  animation: pop 1s var(--ease-spring);
}

.proposal {
  width: 100%;
  max-width: 48rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
  z-index: 1;
}

.question {
  font-family: var(--font-serif);
  font-size: 3rem;
  font-weight: 600;
  line-height: 1.2;
  color: var(--ink);
}

.answer-stage {
  position: relative;
  width: 100%;
  min-height: 24rem;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 2rem;
}

.decline-slot {
  z-index: 2;
  display: inline-block;
  transition: left 200ms var(--ease-gentle), top 200ms var(--ease-gentle);
}

.proposal-footer {
  font-size: 0.7rem;
  letter-spacing: 0.4em;
  text-transform: uppercase;
  color: var(--ink-faint);
}

.yes-forever {
  font-family: var(--font-script);
  font-size: 4rem;
  color: var(--rose);
}

.heartbeat-line {
  position: absolute;
  left: 0;
  right: 0;
  top: 50%;
  height: 6rem;
  transform: translateY(-50%);
  color: var(--rose-soft);
  pointer-events: none;
}

.heartbeat-line svg {
  width: 100%;
  height: 100%;
}

.ekg-path {
  stroke-dasharray: 1000;
  stroke-dashoffset: 1000;
  animation-name: ekg;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
}

.overlay {
  position: fixed;
  inset: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--rose-glow);
  backdrop-filter: blur(6px);
}

.reconsider {
  animation: pop 400ms var(--ease-spring);
}

.pulse {
  animation: pulse 2s ease-in-out infinite;
}

.ping {
  animation: ping 1.2s ease-out infinite;
}

/* === Certificate === */
.accepted-page {
  background: var(--parchment);
}

.certificate {
  position: relative;
  width: 100%;
  max-width: 46rem;
  background: var(--paper);
  border: 2px solid var(--gold);
  outline: 1px solid var(--gold-soft);
  outline-offset: -12px;
  padding: 4rem 3rem;
  display: flex;
  flex-direction: column;
  gap: 2rem;
  font-family: var(--font-serif);
}

.corner {
  position: absolute;
  color: var(--gold);
  font-size: 1.25rem;
}

.corner.top-left { top: 1rem; left: 1rem; }
.corner.top-right { top: 1rem; right: 1rem; }
.corner.bottom-left { bottom: 1rem; left: 1rem; }
.corner.bottom-right { bottom: 1rem; right: 1rem; }

.certificate-heading {
  font-size: 0.8rem;
  letter-spacing: 0.5em;
  text-transform: uppercase;
  color: var(--gold);
}

.gold-rule {
  width: 6rem;
  height: 1px;
  margin: 1rem auto;
  background: var(--gold);
}

.certificate-title {
  font-size: 3rem;
  font-weight: 600;
}

.proclamation,
.testament {
  font-size: 1.15rem;
  font-style: italic;
  color: var(--ink-soft);
}

.couple-name {
  font-family: var(--font-script);
  font-size: 3.25rem;
  color: var(--rose-deep);
}

.couple-and {
  font-size: 0.9rem;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--gold);
}

.certificate-footer {
  display: flex;
  align-items: flex-end;
  justify-content: space-between;
  gap: 2rem;
}

.signatures {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  text-align: left;
}

.signature {
  display: flex;
  flex-direction: column;
  border-bottom: 1px solid var(--gold-soft);
}

.signature-label {
  font-size: 0.7rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--ink-faint);
}

.signature-name {
  font-family: var(--font-script);
  font-size: 1.75rem;
}

.authentication {
  font-size: 0.75rem;
  font-style: italic;
  color: var(--gold);
}

.wax-seal {
  width: 9rem;
  height: 9rem;
}

.wax-seal-body {
  width: 100%;
  height: 100%;
  border-radius: 50%;
  background: radial-gradient(circle at 35% 30%, var(--rose), var(--rose-deep));
  box-shadow: 0 8px 20px var(--rose-glow);
  display: flex;
  align-items: center;
  justify-content: center;
}

.wax-seal-inner {
  width: 80%;
  height: 80%;
  border: 1px dashed var(--rose-soft);
  border-radius: 50%;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  color: var(--paper);
}

.wax-seal-top,
.wax-seal-year {
  font-size: 0.6rem;
  letter-spacing: 0.3em;
}

.wax-seal-center {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
}

.wax-seal-heart {
  opacity: 0.35;
}

.wax-seal-word {
  position: absolute;
  font-weight: 700;
  letter-spacing: 0.1em;
}

.stamp-in {
  animation: stamp 600ms var(--ease-spring) both;
}

.certificate-actions {
  max-width: 46rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.blessing {
  font-family: var(--font-serif);
  font-size: 1.2rem;
  font-style: italic;
  color: var(--ink-soft);
}

.keep-link {
  font-size: 0.8rem;
  color: var(--ink-faint);
}

.keep-link-url {
  font-size: 0.75rem;
  word-break: break-all;
  color: var(--ink-soft);
}

/* === Animations === */
@keyframes pulse {
  0%, 100% { transform: scale(1); opacity: 1; }
  50% { transform: scale(1.08); opacity: 0.8; }
}

@keyframes ping {
  0% { transform: scale(1); opacity: 1; }
  100% { transform: scale(1.6); opacity: 0; }
}

@keyframes pop {
  0% { transform: scale(0.6); opacity: 0; }
  100% { transform: scale(1); opacity: 1; }
}

@keyframes drift {
  0%, 100% { transform: translateY(0) scale(1); }
  50% { transform: translateY(-20px) scale(1.15); }
}

@keyframes ekg {
  to { stroke-dashoffset: 0; }
}

@keyframes shake {
  0%, 100% { transform: translateX(0); }
  25% { transform: translateX(-6px); }
  75% { transform: translateX(6px); }
}

@keyframes stamp {
  0% { transform: scale(2.5) rotate(-20deg); opacity: 0; }
  100% { transform: scale(1) rotate(-8deg); opacity: 1; }
}

/* === Print === */
@media print {
  body,
  .accepted-page {
    background: white;
  }

  .no-print {
    display: none !important;
  }

  .certificate {
    box-shadow: none;
    max-width: none;
  }
}
"#;
