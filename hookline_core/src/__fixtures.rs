use std::collections::HashMap;

use crate::Template;
use crate::TemplateKind;

pub(crate) const OFFER_TEMPLATE: &str = "Olá {nome}, sua oferta de {desconto}% expira em {prazo}";

pub(crate) const WAITLIST_EMAIL: &str = concat!(
	"Olá {{userName}}!\n\n",
	"Você está na posição #{{waitlistPosition}} da nossa waitlist.\n\n",
	"Seu código de convite exclusivo é: {{ inviteCode }}\n\n",
	"Acessar Plataforma: {{loginUrl}}\n",
);

pub(crate) fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
	pairs
		.iter()
		.map(|(key, value)| ((*key).to_string(), (*value).to_string()))
		.collect()
}

pub(crate) fn offer_values() -> HashMap<String, String> {
	values(&[("nome", "Ana"), ("desconto", "50"), ("prazo", "hoje")])
}

pub(crate) fn social_template(content: &str) -> Template {
	Template::new("post", TemplateKind::Social, content)
}

pub(crate) fn email_template(content: &str) -> Template {
	Template::new("email", TemplateKind::Email, content)
}

pub(crate) const HOOKS_JSON: &str = r#"[
  {
    "id": "custom_1",
    "category": "Urgência",
    "text": "Só hoje: {oferta}",
    "example": "Só hoje: frete grátis",
    "tags": ["oferta"]
  },
  {
    "id": "custom_2",
    "category": "Prova Social",
    "text": "{número} clientes aprovam",
    "example": "300 clientes aprovam"
  }
]"#;

pub(crate) const HOOKS_YAML: &str = r"- id: custom_1
  category: Curiosidade
  text: Por que {nicho} funciona?
  example: Por que storytelling funciona?
  tags: [pergunta]
";

pub(crate) const HOOKS_TOML: &str = r#"[[hooks]]
id = "custom_1"
category = "Autoridade"
text = "Depois de {tempo} com {nicho}"
example = "Depois de 10 anos com vendas"
tags = ["experiência"]
"#;
