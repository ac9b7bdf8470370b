//! Fixed markup fragments for the generated document.

pub(crate) fn hero(title: &str, description: &str) -> String {
    format!(
        r#"        <section class="hero">
            <h1>{title}</h1>
            <p>{description}</p>
            <button>Начать</button>
        </section>
"#
    )
}

pub(crate) const ABOUT: &str = r#"        <section class="about">
            <h2>О нас</h2>
            <p>Расскажем о нашей компании и миссии.</p>
        </section>
"#;

pub(crate) const CONTACT: &str = r#"        <section class="contact">
            <h2>Контакты</h2>
            <p>Email: info@example.com</p>
            <p>Телефон: +7 (999) 123-45-67</p>
        </section>
"#;

pub(crate) fn shell(title: &str, primary: &str, secondary: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{ font-family: 'Inter', -apple-system, sans-serif; line-height: 1.6; color: #333; }}
        .hero {{
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            justify-content: center;
            align-items: center;
            background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);
            color: white;
            text-align: center;
            padding: 2rem;
        }}
        .hero h1 {{ font-size: 3rem; margin-bottom: 1rem; font-weight: 700; }}
        .hero p {{ font-size: 1.5rem; margin-bottom: 2rem; opacity: 0.9; }}
        .hero button {{
            padding: 1rem 2rem;
            font-size: 1.2rem;
            background: white;
            color: {primary};
            border: none;
            border-radius: 8px;
            cursor: pointer;
            font-weight: 600;
            transition: transform 0.2s;
        }}
        .hero button:hover {{ transform: scale(1.05); }}
        section {{ padding: 4rem 2rem; max-width: 1200px; margin: 0 auto; }}
        section h2 {{ font-size: 2.5rem; margin-bottom: 1.5rem; color: {primary}; }}
        section p {{ font-size: 1.2rem; color: #666; margin-bottom: 1rem; }}
        .about {{ background: #f9f9f9; }}
        .contact {{ text-align: center; }}
    </style>
</head>
<body>
{body}</body>
</html>
"#
    )
}
