use yew::prelude::*;

/// Fonts, palette and the blocks both pages are built from.
#[function_component(GlobalStyle)]
pub fn global_style() -> Html {
    html! {
        <style>
            {r#"
            @import url('https://fonts.googleapis.com/css2?family=Cormorant+Garamond:ital,wght@0,300;0,400;0,500;0,600;0,700;1,400&family=Inter:wght@300;400;500;600&display=swap');

            :root {
                --cream: #F5E9DD;
                --rose: #E8CFC4;
                --blush: #FBF6F4;
                --ink: #000;
                --muted: #4b5563;
            }
            * {
                box-sizing: border-box;
                -webkit-font-smoothing: antialiased;
                -moz-osx-font-smoothing: grayscale;
            }
            html {
                scroll-behavior: smooth;
            }
            body {
                margin: 0;
                font-family: 'Inter', sans-serif;
                color: var(--ink);
                background: #fff;
            }
            ::selection { background: var(--rose); color: #000; }
            ::-webkit-scrollbar { width: 10px; }
            ::-webkit-scrollbar-track { background: var(--cream); }
            ::-webkit-scrollbar-thumb { background: var(--rose); border-radius: 5px; }
            ::-webkit-scrollbar-thumb:hover { background: #000; }

            .serif { font-family: 'Cormorant Garamond', serif; }
            .container {
                max-width: 80rem;
                margin: 0 auto;
                padding: 0 1.5rem;
            }
            .section { padding: 8rem 0; position: relative; }
            .bg-white { background: #fff; }
            .bg-cream { background: var(--cream); }
            .bg-blush { background: var(--blush); }
            .bg-dark { background: #000; color: #fff; }

            /* Viewport-entry motion */
            .in-view {
                transition: opacity 0.8s cubic-bezier(0.6, -0.05, 0.01, 0.99),
                            transform 0.8s cubic-bezier(0.6, -0.05, 0.01, 0.99);
            }
            .motion-fade-up { opacity: 0; transform: translateY(60px); }
            .motion-fade-left { opacity: 0; transform: translateX(-50px); }
            .motion-fade-right { opacity: 0; transform: translateX(50px); }
            .motion-fade { opacity: 0; }
            .motion-zoom { opacity: 0; transform: scale(0.9); }
            .in-view.is-visible { opacity: 1; transform: none; }

            .scroll-progress {
                position: fixed;
                top: 0;
                left: 0;
                width: 100%;
                height: 2px;
                background: var(--rose);
                transform-origin: 0 50%;
                z-index: 60;
                pointer-events: none;
            }

            /* Section headings */
            .section-heading { text-align: center; margin-bottom: 5rem; }
            .eyebrow {
                font-size: 0.75rem;
                text-transform: uppercase;
                letter-spacing: 0.3em;
                color: var(--rose);
                font-weight: 500;
            }
            .eyebrow-rule {
                width: 3rem;
                height: 1px;
                background: var(--rose);
                margin-top: 0.5rem;
            }
            .section-title {
                font-family: 'Cormorant Garamond', serif;
                font-size: clamp(2.25rem, 4vw, 3rem);
                font-weight: 300;
                margin: 1rem 0 1.5rem;
                line-height: 1.15;
            }
            .section-title .accent { font-style: italic; }
            .section-subtitle {
                color: var(--muted);
                max-width: 42rem;
                margin: 0 auto;
                font-weight: 300;
                font-size: 1.125rem;
            }
            .section-heading.dark .section-subtitle { color: #9ca3af; }

            /* Hero */
            .hero {
                position: relative;
                min-height: 100vh;
                display: flex;
                align-items: center;
                overflow: hidden;
                background: var(--cream);
            }
            .hero-glow {
                position: absolute;
                top: 25%;
                right: 0;
                width: 600px;
                height: 600px;
                background: var(--rose);
                border-radius: 50%;
                filter: blur(64px);
                opacity: 0.15;
                animation: glowIn 1.5s ease-out;
            }
            @keyframes glowIn {
                from { transform: scale(0); opacity: 0; }
            }
            .hero-grid {
                position: relative;
                z-index: 10;
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 3rem;
                align-items: center;
                padding-top: 8rem;
                padding-bottom: 5rem;
            }
            .hero-badge {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                border: 1px solid rgba(0, 0, 0, 0.1);
                padding: 0.5rem 1rem;
                border-radius: 9999px;
                background: rgba(255, 255, 255, 0.6);
                backdrop-filter: blur(4px);
                font-size: 0.75rem;
                text-transform: uppercase;
                letter-spacing: 0.2em;
                font-weight: 300;
            }
            .hero-badge .icon { color: var(--rose); }
            .hero-title {
                font-family: 'Cormorant Garamond', serif;
                font-size: clamp(3rem, 7vw, 6rem);
                line-height: 1.05;
                font-weight: 300;
                margin: 2rem 0;
            }
            .hero-title em {
                display: block;
                font-style: italic;
                font-weight: 400;
                margin-top: 0.5rem;
            }
            .hero-lead {
                color: var(--muted);
                font-size: 1.25rem;
                line-height: 1.7;
                max-width: 36rem;
                font-weight: 300;
            }
            .hero-actions {
                display: flex;
                align-items: center;
                gap: 1.5rem;
                padding-top: 1rem;
                flex-wrap: wrap;
            }
            .hero-photo {
                position: relative;
                max-width: 32rem;
                height: 700px;
                margin: 0 auto;
                width: 100%;
            }
            .hero-photo img {
                position: relative;
                z-index: 1;
                width: 100%;
                height: 100%;
                object-fit: cover;
            }
            .hero-photo::after {
                content: '';
                position: absolute;
                right: -2rem;
                bottom: -2rem;
                width: 100%;
                height: 100%;
                border: 2px solid var(--rose);
                z-index: 0;
            }

            /* Buttons */
            .btn-primary, .btn-rose, .btn-link, .btn-underline {
                font: inherit;
                cursor: pointer;
                text-transform: uppercase;
                letter-spacing: 0.1em;
                font-size: 0.875rem;
                font-weight: 300;
                transition: all 0.3s ease;
                text-decoration: none;
            }
            .btn-primary {
                background: #000;
                color: #fff;
                border: none;
                border-radius: 2px;
                padding: 1rem 2.5rem;
            }
            .btn-primary:hover { background: var(--rose); color: #000; transform: scale(1.03); }
            .btn-rose {
                background: var(--rose);
                color: #000;
                border: none;
                border-radius: 2px;
                padding: 0.75rem 2rem;
            }
            .btn-rose:hover { background: #000; color: #fff; }
            .btn-link {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                background: none;
                border: none;
                color: #000;
                padding: 0;
            }
            .btn-link:hover { color: var(--rose); transform: translateX(5px); }
            .btn-underline {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                background: none;
                border: none;
                border-bottom: 2px solid #000;
                padding: 0 0 0.25rem;
                color: #000;
            }
            .btn-underline:hover { color: var(--rose); border-color: var(--rose); }
            .btn-block { width: 100%; padding: 1rem; }

            /* Two-column media + text */
            .split {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 4rem;
                align-items: center;
            }
            .split-photo {
                position: relative;
                height: 600px;
                overflow: hidden;
                border-radius: 2px;
            }
            .split-photo img { width: 100%; height: 100%; object-fit: cover; }
            .split-copy p {
                color: var(--muted);
                font-size: 1.125rem;
                line-height: 1.75;
                font-weight: 300;
            }
            .stats {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(8rem, 1fr));
                gap: 2rem;
                padding-top: 1.5rem;
            }
            .stat-value {
                display: flex;
                align-items: center;
                gap: 0.5rem;
                font-family: 'Cormorant Garamond', serif;
                font-size: 1.5rem;
            }
            .stat-value .icon { color: var(--rose); }
            .stat-label {
                font-size: 0.875rem;
                color: #6b7280;
                text-transform: uppercase;
                letter-spacing: 0.05em;
                font-weight: 300;
            }

            /* Cards */
            .card-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                gap: 2rem;
            }
            .card {
                position: relative;
                background: #fff;
                padding: 2.5rem;
                border-radius: 2px;
                overflow: hidden;
                transition: box-shadow 0.5s ease, transform 0.5s ease;
                height: 100%;
            }
            .card:hover {
                box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                transform: translateY(-10px);
            }
            .card-icon {
                width: 4rem;
                height: 4rem;
                border-radius: 50%;
                background: var(--cream);
                display: flex;
                align-items: center;
                justify-content: center;
                margin-bottom: 1.5rem;
                transition: background 0.3s ease;
            }
            .card:hover .card-icon { background: var(--rose); }
            .card h3 {
                font-family: 'Cormorant Garamond', serif;
                font-size: 1.875rem;
                font-weight: 300;
                margin: 0 0 1rem;
            }
            .check-list {
                list-style: none;
                padding: 0;
                margin: 0 0 2rem;
                color: var(--muted);
                font-weight: 300;
            }
            .check-list li {
                display: flex;
                align-items: flex-start;
                gap: 0.75rem;
                margin-bottom: 0.75rem;
            }
            .check-list .icon { color: var(--rose); flex-shrink: 0; margin-top: 2px; }

            /* Testimonials */
            .testimonial-card {
                background: #fff;
                padding: 2.5rem;
                border-radius: 2px;
                height: 100%;
                box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
                transition: box-shadow 0.3s ease;
            }
            .testimonial-card:hover { box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1); }
            .testimonial-stars { display: flex; gap: 0.25rem; color: var(--rose); margin-bottom: 1.5rem; }
            .testimonial-text {
                font-family: 'Cormorant Garamond', serif;
                font-style: italic;
                font-size: 1.25rem;
                line-height: 1.6;
                color: #374151;
                margin-bottom: 2rem;
            }
            .testimonial-author { display: flex; align-items: center; gap: 1rem; }
            .testimonial-avatar {
                width: 3rem;
                height: 3rem;
                border-radius: 50%;
                background: var(--rose);
                display: flex;
                align-items: center;
                justify-content: center;
                font-family: 'Cormorant Garamond', serif;
                font-size: 1.25rem;
            }
            .testimonial-name { margin: 0; font-weight: 500; }
            .testimonial-role {
                margin: 0;
                font-size: 0.75rem;
                text-transform: uppercase;
                letter-spacing: 0.1em;
                color: #6b7280;
                font-weight: 300;
            }

            /* Forms */
            .form-grid { display: grid; gap: 1.5rem; }
            .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
            .field label {
                display: block;
                font-size: 0.75rem;
                text-transform: uppercase;
                letter-spacing: 0.1em;
                color: #6b7280;
                margin-bottom: 0.5rem;
                font-weight: 300;
            }
            .field input, .field select, .field textarea {
                width: 100%;
                background: rgba(245, 233, 221, 0.3);
                border: 1px solid #e5e7eb;
                padding: 1rem 1.5rem;
                border-radius: 2px;
                font: inherit;
                font-weight: 300;
                color: #000;
                transition: border-color 0.3s ease;
            }
            .field textarea { resize: none; }
            .field input:focus, .field select:focus, .field textarea:focus {
                outline: none;
                border-color: var(--rose);
            }

            /* Contact details */
            .detail-list { display: grid; gap: 1.5rem; }
            .detail { display: flex; align-items: flex-start; gap: 1rem; }
            .detail-icon {
                width: 3rem;
                height: 3rem;
                border-radius: 50%;
                background: #fff;
                display: flex;
                align-items: center;
                justify-content: center;
                flex-shrink: 0;
                color: var(--rose);
            }
            .detail-label {
                margin: 0 0 0.25rem;
                font-size: 0.75rem;
                text-transform: uppercase;
                letter-spacing: 0.1em;
                color: #6b7280;
                font-weight: 300;
            }
            .detail-line { margin: 0; font-weight: 300; }
            .detail-line + .detail-line { font-size: 0.875rem; color: #6b7280; margin-top: 0.25rem; }
            .socials { display: flex; gap: 1rem; }
            .social {
                width: 3rem;
                height: 3rem;
                border-radius: 50%;
                background: #000;
                color: #fff;
                display: flex;
                align-items: center;
                justify-content: center;
                transition: all 0.3s ease;
            }
            .social:hover { background: var(--rose); color: #000; transform: scale(1.1); }

            /* Footer */
            .site-footer { background: #000; color: #fff; padding: 5rem 0 2.5rem; }
            .footer-grid {
                display: grid;
                grid-template-columns: 2fr 1fr 1fr;
                gap: 3rem;
                margin-bottom: 4rem;
            }
            .footer-brand {
                font-family: 'Cormorant Garamond', serif;
                font-size: 1.875rem;
                font-weight: 300;
                margin: 0 0 1.5rem;
            }
            .footer-brand span { font-style: italic; font-weight: 500; }
            .footer-about { color: #9ca3af; font-weight: 300; line-height: 1.7; max-width: 28rem; }
            .footer-grid h4 {
                text-transform: uppercase;
                letter-spacing: 0.1em;
                font-size: 0.75rem;
                font-weight: 500;
                color: var(--rose);
                margin: 0 0 1.5rem;
            }
            .footer-list { list-style: none; padding: 0; margin: 0; color: #9ca3af; font-weight: 300; }
            .footer-list li { margin-bottom: 0.75rem; cursor: pointer; transition: all 0.3s ease; }
            .footer-list li:hover { color: #fff; transform: translateX(5px); }
            .footer-route { color: var(--rose); text-decoration: none; }
            .footer-bottom {
                border-top: 1px solid #1f2937;
                padding-top: 2rem;
                display: flex;
                justify-content: space-between;
                align-items: center;
                flex-wrap: wrap;
                gap: 1rem;
                color: #6b7280;
                font-size: 0.75rem;
                text-transform: uppercase;
                letter-spacing: 0.1em;
                font-weight: 300;
            }
            .footer-bottom a { color: inherit; text-decoration: none; margin-left: 1.5rem; }
            .footer-bottom a:hover { color: var(--rose); }
            .site-footer .social { background: #1f2937; }

            @media (max-width: 1024px) {
                .hero-grid, .split { grid-template-columns: 1fr; }
                .hero-grid { text-align: center; }
                .hero-actions { justify-content: center; }
                .hero-lead { margin: 0 auto; }
                .hero-photo { height: 500px; }
                .footer-grid { grid-template-columns: 1fr; }
            }
            @media (max-width: 640px) {
                .form-row { grid-template-columns: 1fr; }
                .section { padding: 5rem 0; }
                .card { padding: 2rem; }
            }
            "#}
        </style>
    }
}
