use serde::Serialize;

use crate::PlaceholderSyntax;
use crate::Template;
use crate::TemplateKind;

/// A market segment inferred from keywords in a template body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Niche {
	Tech,
	Health,
	Education,
	Ecommerce,
	Service,
	RealEstate,
	Beauty,
	Food,
}

/// Keywords that tag a template for example values. All keywords are already
/// lowercase and accent folded.
const EXAMPLE_SIGNALS: &[(Niche, &[&str])] = &[
	(Niche::Service, &["servico", "consultoria"]),
	(Niche::Tech, &["app", "software"]),
	(Niche::Health, &["saude", "medico"]),
	(Niche::Education, &["curso", "aula"]),
];

/// Keywords that tag a template for campaign briefs, in priority order.
const BRIEF_SIGNALS: &[(Niche, &[&str])] = &[
	(Niche::Tech, &["app", "software", "digital", "sistema"]),
	(Niche::Health, &["saude", "medico", "clinica", "fitness"]),
	(Niche::Education, &["curso", "aula", "ensino", "aprender"]),
	(Niche::Ecommerce, &["compra", "produto", "loja"]),
	(Niche::Service, &["servico", "consultoria", "atendimento"]),
	(Niche::RealEstate, &["imovel", "casa", "apartamento"]),
	(Niche::Beauty, &["beleza", "estetica", "cabelo"]),
	(Niche::Food, &["restaurante", "comida", "delivery"]),
];

/// The niches a template body belongs to according to `signals`, in table
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Niches(Vec<Niche>);

impl Niches {
	fn detect(content: &str, signals: &[(Niche, &[&str])]) -> Self {
		let folded = fold_accents(&content.to_lowercase());
		let niches = signals
			.iter()
			.filter(|(_, keywords)| keywords.iter().any(|keyword| folded.contains(*keyword)))
			.map(|(niche, _)| *niche)
			.collect();

		Self(niches)
	}

	fn contains(&self, niche: Niche) -> bool {
		self.0.contains(&niche)
	}

	fn first(&self) -> Option<Niche> {
		self.0.first().copied()
	}
}

/// How a rule decides whether a variable name applies.
#[derive(Debug, Clone, Copy)]
enum NameMatch {
	/// Any of the keywords appears in the name.
	Any(&'static [&'static str]),
	/// Every keyword appears in the name.
	All(&'static [&'static str]),
}

impl NameMatch {
	fn matches(self, name: &str) -> bool {
		match self {
			Self::Any(keywords) => keywords.iter().any(|keyword| name.contains(*keyword)),
			Self::All(keywords) => keywords.iter().all(|keyword| name.contains(*keyword)),
		}
	}
}

/// The value a matching rule produces.
#[derive(Debug, Clone, Copy)]
enum ExampleValue {
	Fixed(&'static str),
	/// First niche present in the template wins, otherwise the default.
	ByNiche(&'static [(Niche, &'static str)], &'static str),
}

impl ExampleValue {
	fn resolve(self, niches: &Niches) -> &'static str {
		match self {
			Self::Fixed(value) => value,
			Self::ByNiche(choices, default) => {
				choices
					.iter()
					.find(|(niche, _)| niches.contains(*niche))
					.map_or(default, |(_, value)| *value)
			}
		}
	}
}

#[derive(Debug, Clone, Copy)]
struct ExampleRule {
	name: NameMatch,
	value: ExampleValue,
}

/// Evaluated top to bottom; the first rule whose name matcher accepts the
/// folded variable name wins.
const EXAMPLE_RULES: &[ExampleRule] = &[
	ExampleRule {
		name: NameMatch::All(&["nome", "cliente"]),
		value: ExampleValue::Fixed("Maria Silva"),
	},
	ExampleRule {
		name: NameMatch::All(&["nome", "empresa"]),
		value: ExampleValue::ByNiche(
			&[
				(Niche::Tech, "TechSolutions"),
				(Niche::Health, "Clínica VitaLife"),
			],
			"MinhaEmpresa Ltda",
		),
	},
	ExampleRule {
		name: NameMatch::Any(&["produto"]),
		value: ExampleValue::ByNiche(
			&[
				(Niche::Tech, "App de Gestão"),
				(Niche::Health, "Plano Premium"),
				(Niche::Education, "Curso Digital"),
			],
			"Produto Premium",
		),
	},
	ExampleRule {
		name: NameMatch::Any(&["preco", "valor"]),
		value: ExampleValue::ByNiche(
			&[(Niche::Service, "R$ 297"), (Niche::Education, "R$ 497")],
			"R$ 199",
		),
	},
	ExampleRule {
		name: NameMatch::Any(&["desconto"]),
		value: ExampleValue::Fixed("50% OFF"),
	},
	ExampleRule {
		name: NameMatch::Any(&["beneficio"]),
		value: ExampleValue::ByNiche(
			&[
				(Niche::Tech, "economia de 10h por semana"),
				(Niche::Health, "melhora em 30 dias"),
			],
			"resultados garantidos",
		),
	},
	ExampleRule {
		name: NameMatch::Any(&["problema"]),
		value: ExampleValue::ByNiche(
			&[
				(Niche::Tech, "perda de tempo com tarefas manuais"),
				(Niche::Health, "falta de energia no dia a dia"),
			],
			"baixa produtividade",
		),
	},
	ExampleRule {
		name: NameMatch::Any(&["acao", "cta"]),
		value: ExampleValue::Fixed("Clique e garanta sua vaga"),
	},
	ExampleRule {
		name: NameMatch::Any(&["prazo"]),
		value: ExampleValue::Fixed("até sexta-feira"),
	},
	ExampleRule {
		name: NameMatch::Any(&["publico"]),
		value: ExampleValue::ByNiche(
			&[
				(Niche::Tech, "empreendedores digitais"),
				(Niche::Health, "pessoas de 30-50 anos"),
			],
			"empresários e gestores",
		),
	},
	ExampleRule {
		name: NameMatch::Any(&["email"]),
		value: ExampleValue::Fixed("contato@empresa.com"),
	},
	ExampleRule {
		name: NameMatch::Any(&["telefone"]),
		value: ExampleValue::Fixed("(11) 99999-9999"),
	},
	ExampleRule {
		name: NameMatch::Any(&["cidade"]),
		value: ExampleValue::Fixed("São Paulo"),
	},
	ExampleRule {
		name: NameMatch::Any(&["data"]),
		value: ExampleValue::Fixed("15 de março"),
	},
	ExampleRule {
		name: NameMatch::Any(&["hora"]),
		value: ExampleValue::Fixed("19h30"),
	},
	ExampleRule {
		name: NameMatch::Any(&["url"]),
		value: ExampleValue::Fixed("www.empresa.com.br"),
	},
];

/// Propose a preview value for `variable`. The template body, when given,
/// refines the guess for niche-dependent variables such as `produto`.
///
/// Unknown variables fall back to `conteúdo para <Formatted Name>`.
pub fn synthesize_example(variable: &str, template: Option<&Template>) -> String {
	let name = fold_accents(&variable.to_lowercase());
	let niches = template
		.map(|template| Niches::detect(&template.content, EXAMPLE_SIGNALS))
		.unwrap_or_default();

	EXAMPLE_RULES
		.iter()
		.find(|rule| rule.name.matches(&name))
		.map_or_else(
			|| format!("conteúdo para {}", format_variable_name(variable)),
			|rule| rule.value.resolve(&niches).to_string(),
		)
}

/// A variable paired with its display label and proposed example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
	pub variable: String,
	pub label: String,
	pub example: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub options: Option<&'static [&'static str]>,
}

/// Suggestions for every variable in `template`, in first-seen order.
pub fn suggest_examples(template: &Template, syntax: PlaceholderSyntax) -> Vec<Suggestion> {
	template
		.variables(syntax)
		.into_iter()
		.map(|variable| {
			Suggestion {
				label: format_variable_name(&variable),
				example: synthesize_example(&variable, Some(template)),
				options: suggested_options(&variable),
				variable,
			}
		})
		.collect()
}

/// Describe a campaign that would fit `template`, used as a writing prompt
/// when the user asks for the template to be filled automatically.
pub fn campaign_brief(template: &Template) -> &'static str {
	let niches = Niches::detect(&template.content, BRIEF_SIGNALS);
	if let Some(niche) = niches.first() {
		return match niche {
			Niche::Tech => {
				"Lançamento de app de gestão financeira, público empreendedores de 25-45 anos, \
				 mensalidade R$ 99, benefício principal é controle automatizado, oferta especial \
				 primeiro mês grátis"
			}
			Niche::Health => {
				"Programa de emagrecimento saudável, público mulheres de 30-50 anos, investimento \
				 R$ 397, resultado garantido perda de 5kg em 30 dias, desconto 40% para primeiras \
				 50 vagas"
			}
			Niche::Education => {
				"Curso online de Marketing Digital, público profissionais em transição, preço R$ \
				 497, certificado reconhecido pelo MEC, bônus mentorias individuais, última semana \
				 de inscrições"
			}
			Niche::Ecommerce => {
				"Black Friday loja de roupas femininas, público mulheres de 20-40 anos, descontos \
				 até 70%, produtos vestidos e acessórios, frete grátis acima R$ 150, válido apenas \
				 3 dias"
			}
			Niche::Service => {
				"Consultoria empresarial personalizada, público CEOs e diretores, investimento R$ \
				 2.500, garantia de aumento de 30% na produtividade, apenas 10 vagas por mês"
			}
			Niche::RealEstate => {
				"Apartamento de 2 quartos no centro, público jovens casais, preço R$ 280.000, \
				 financiamento facilitado, área de lazer completa, últimas unidades disponíveis"
			}
			Niche::Beauty => {
				"Tratamento de rejuvenescimento facial, público mulheres de 35-60 anos, sessão R$ \
				 350, resultado visível em 7 dias, promoção 3 sessões por 2, agendamento limitado"
			}
			Niche::Food => {
				"Restaurante de comida caseira delivery, público famílias, pratos a partir de R$ \
				 25, entrega em 30 minutos, desconto 20% primeira compra, área de cobertura zona sul"
			}
		};
	}

	match template.kind {
		TemplateKind::Email => {
			"Campanha email para lançamento de produto, público clientes VIP, oferta exclusiva \
			 com 30% desconto, válido por 48 horas apenas, call to action clique aqui"
		}
		TemplateKind::Ad => {
			"Anúncio para captação de leads, público interessados em investimento, ebook gratuito \
			 sobre finanças, público 25-55 anos, região São Paulo e grande ABC"
		}
		TemplateKind::Blog => {
			"Artigo sobre produtividade no trabalho, público profissionais liberais, dicas \
			 práticas para otimizar tempo, call to action baixar planilha gratuita"
		}
		TemplateKind::Landing => {
			"Landing page para webinar gratuito, público empreendedores iniciantes, tema como \
			 validar ideias de negócio, data próxima quinta 19h, vagas limitadas"
		}
		TemplateKind::Social => {
			"Campanha para seu negócio, público seu cliente ideal, produto/serviço principal, \
			 preço atrativo, benefício exclusivo, oferta por tempo limitado"
		}
	}
}

const TONE_OPTIONS: &[&str] = &[
	"casual",
	"profissional",
	"persuasivo",
	"amigável",
	"técnico",
	"criativo",
];
const CHANNEL_OPTIONS: &[&str] = &[
	"Instagram",
	"Facebook",
	"Twitter",
	"LinkedIn",
	"TikTok",
	"YouTube",
	"Blog",
	"Email",
];
const FORMAT_OPTIONS: &[&str] = &[
	"post",
	"story",
	"carrossel",
	"vídeo",
	"anúncio",
	"email",
	"artigo",
];

/// Fixed choices for variables that only accept a known set of values.
pub fn suggested_options(variable: &str) -> Option<&'static [&'static str]> {
	match variable {
		"tom" => Some(TONE_OPTIONS),
		"canal" => Some(CHANNEL_OPTIONS),
		"formato" => Some(FORMAT_OPTIONS),
		_ => None,
	}
}

/// Normalize a user supplied variable name: lowercase ASCII letters and
/// digits only.
pub fn sanitize_variable_name(raw: &str) -> String {
	raw.to_lowercase()
		.chars()
		.filter(char::is_ascii_alphanumeric)
		.collect()
}

/// Turn `nome_cliente` or `nomeCliente` into `Nome Cliente`.
pub fn format_variable_name(variable: &str) -> String {
	let mut spaced = String::with_capacity(variable.len() + 4);
	let mut previous: Option<char> = None;
	for ch in variable.chars() {
		let ch = if ch == '_' { ' ' } else { ch };
		if ch.is_ascii_uppercase() && previous.is_some_and(|p| p.is_ascii_lowercase()) {
			spaced.push(' ');
		}
		spaced.push(ch);
		previous = Some(ch);
	}

	let mut formatted = String::with_capacity(spaced.len());
	let mut at_word_start = true;
	for ch in spaced.to_lowercase().chars() {
		if at_word_start && ch.is_alphanumeric() {
			formatted.extend(ch.to_uppercase());
		} else {
			formatted.push(ch);
		}
		at_word_start = !ch.is_alphanumeric();
	}

	formatted
}

/// Strip the Portuguese diacritics from lowercase text so keyword tables can
/// be written without accents.
pub(crate) fn fold_accents(text: &str) -> String {
	text.chars()
		.map(|ch| {
			match ch {
				'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
				'é' | 'è' | 'ê' | 'ë' => 'e',
				'í' | 'ì' | 'î' | 'ï' => 'i',
				'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
				'ú' | 'ù' | 'û' | 'ü' => 'u',
				'ç' => 'c',
				other => other,
			}
		})
		.collect()
}
