use crate::HookCategory;

/// A hook as it is stored in the bundled library.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HookRecord {
	pub id: &'static str,
	pub category: HookCategory,
	pub text: &'static str,
	pub example: &'static str,
	pub tags: &'static [&'static str],
}

/// The bundled hook library in declaration order.
pub(crate) const BUILTIN_HOOKS: &[HookRecord] = &[
	HookRecord {
		id: "curiosity_1",
		category: HookCategory::Curiosity,
		text: "Você sabia que {nicho} pode aumentar {benefício} em {tempo}?",
		example: "Você sabia que posts com storytelling podem dobrar o engajamento em 7 dias?",
		tags: &["pergunta", "estatística", "descoberta"],
	},
	HookRecord {
		id: "curiosity_2",
		category: HookCategory::Curiosity,
		text: "O que acontece quando você {ação} por {tempo}?",
		example: "O que acontece quando você posta conteúdo todos os dias por 30 dias?",
		tags: &["experimento", "curiosidade", "tempo"],
	},
	HookRecord {
		id: "curiosity_3",
		category: HookCategory::Curiosity,
		text: "Por que {número}% das pessoas falha em {objetivo}?",
		example: "Por que 90% das pessoas falha em construir uma audiência online?",
		tags: &["estadística", "falha", "problema"],
	},
	HookRecord {
		id: "curiosity_4",
		category: HookCategory::Curiosity,
		text: "Existe um segredo que {nicho} não quer que você saiba...",
		example: "Existe um segredo que grandes influencers não querem que você saiba...",
		tags: &["segredo", "revelação", "exclusivo"],
	},
	HookRecord {
		id: "curiosity_5",
		category: HookCategory::Curiosity,
		text: "Como {resultado} pode mudar sua {área} para sempre?",
		example: "Como uma simples mudança de mindset pode mudar sua carreira para sempre?",
		tags: &["transformação", "mudança", "impacto"],
	},
	HookRecord {
		id: "authority_1",
		category: HookCategory::Authority,
		text: "Depois de {tempo} trabalhando com {nicho}, descobri que...",
		example: "Depois de 10 anos trabalhando com marketing digital, descobri que...",
		tags: &["experiência", "expertise", "descoberta"],
	},
	HookRecord {
		id: "authority_2",
		category: HookCategory::Authority,
		text: "Como alguém que já {conquista}, posso te garantir que...",
		example: "Como alguém que já gerou mais de R$ 1M online, posso te garantir que...",
		tags: &["credencial", "garantia", "experiência"],
	},
	HookRecord {
		id: "authority_3",
		category: HookCategory::Authority,
		text: "Nos últimos {tempo}, ajudei {número} pessoas a {resultado}",
		example: "Nos últimos 5 anos, ajudei mais de 1000 pessoas a construir seus negócios digitais",
		tags: &["resultados", "clientes", "impacto"],
	},
	HookRecord {
		id: "authority_4",
		category: HookCategory::Authority,
		text: "Antes de você {ação}, precisa saber o que aprendi em {tempo} de {área}",
		example: "Antes de você investir em tráfego pago, precisa saber o que aprendi em 8 anos de marketing digital",
		tags: &["aviso", "experiência", "conselho"],
	},
	HookRecord {
		id: "authority_5",
		category: HookCategory::Authority,
		text: "{Número} erros que vejo constantemente em {nicho} (e como evitar)",
		example: "5 erros que vejo constantemente em estratégias de conteúdo (e como evitar)",
		tags: &["erros", "lista", "solução"],
	},
	HookRecord {
		id: "urgency_1",
		category: HookCategory::Urgency,
		text: "Só até {data}: {oferta} com {desconto}% de desconto",
		example: "Só até sexta-feira: Curso completo com 50% de desconto",
		tags: &["prazo", "oferta", "desconto"],
	},
	HookRecord {
		id: "urgency_2",
		category: HookCategory::Urgency,
		text: "Últimas {número} vagas para {produto} (acaba em {tempo})",
		example: "Últimas 10 vagas para a mentoria exclusiva (acaba em 48h)",
		tags: &["escassez", "vagas", "prazo"],
	},
	HookRecord {
		id: "urgency_3",
		category: HookCategory::Urgency,
		text: "Se você não {ação} agora, vai perder a chance de {benefício}",
		example: "Se você não começar agora, vai perder a chance de sair na frente da concorrência",
		tags: &["perda", "oportunidade", "agora"],
	},
	HookRecord {
		id: "urgency_4",
		category: HookCategory::Urgency,
		text: "Por que {tempo} é o momento perfeito para {ação}?",
		example: "Por que 2024 é o momento perfeito para criar seu negócio digital?",
		tags: &["timing", "oportunidade", "momento"],
	},
	HookRecord {
		id: "urgency_5",
		category: HookCategory::Urgency,
		text: "Atenção: {situação} está prestes a mudar {área} para sempre",
		example: "Atenção: a nova legislação está prestes a mudar o marketing digital para sempre",
		tags: &["atenção", "mudança", "impacto"],
	},
	HookRecord {
		id: "story_1",
		category: HookCategory::Storytelling,
		text: "Era {tempo} quando eu {situação}. Hoje, {resultado}.",
		example: "Era 2019 quando eu tinha apenas 50 seguidores. Hoje, mais de 100k pessoas acompanham nosso conteúdo.",
		tags: &["antes-depois", "transformação", "jornada"],
	},
	HookRecord {
		id: "story_2",
		category: HookCategory::Storytelling,
		text: "Lembro como se fosse ontem: {situação}. Foi aí que tudo mudou...",
		example: "Lembro como se fosse ontem: meu primeiro produto digital vendeu apenas 3 unidades. Foi aí que tudo mudou...",
		tags: &["memória", "ponto-virada", "mudança"],
	},
	HookRecord {
		id: "story_3",
		category: HookCategory::Storytelling,
		text: "A história que vou contar pode chocar você, mas aconteceu comigo em {local}",
		example: "A história que vou contar pode chocar você, mas aconteceu comigo em uma reunião com clientes",
		tags: &["choque", "real", "experiência"],
	},
	HookRecord {
		id: "story_4",
		category: HookCategory::Storytelling,
		text: "Nunca vou esquecer o dia em que {evento}. Mudou minha visão sobre {tema}",
		example: "Nunca vou esquecer o dia em que perdi meu maior cliente. Mudou minha visão sobre relacionamentos comerciais",
		tags: &["marco", "aprendizado", "mudança"],
	},
	HookRecord {
		id: "story_5",
		category: HookCategory::Storytelling,
		text: "Se alguém me dissesse em {tempo} que eu {situação atual}, eu riria...",
		example: "Se alguém me dissesse em 2020 que eu teria uma empresa de 7 dígitos, eu riria...",
		tags: &["incredulidade", "crescimento", "evolução"],
	},
	HookRecord {
		id: "social_1",
		category: HookCategory::SocialProof,
		text: "{Número} pessoas já {ação} com {produto/serviço}",
		example: "Mais de 5.000 pessoas já transformaram seus negócios com nosso método",
		tags: &["números", "transformação", "método"],
	},
	HookRecord {
		id: "social_2",
		category: HookCategory::SocialProof,
		text: "Ontem recebi esta mensagem de um cliente: '{depoimento}'",
		example: "Ontem recebi esta mensagem de um cliente: 'Em 60 dias triplicou meu faturamento'",
		tags: &["depoimento", "resultado", "cliente"],
	},
	HookRecord {
		id: "social_3",
		category: HookCategory::SocialProof,
		text: "Por que {número} empresas escolheram nossa {solução} em {tempo}?",
		example: "Por que mais de 500 empresas escolheram nossa consultoria em 2023?",
		tags: &["escolha", "empresas", "preferência"],
	},
	HookRecord {
		id: "social_4",
		category: HookCategory::SocialProof,
		text: "Não sou eu quem diz, são os {número} casos de sucesso que comprovam:",
		example: "Não sou eu quem diz, são os 300 casos de sucesso que comprovam:",
		tags: &["prova", "casos", "resultados"],
	},
	HookRecord {
		id: "social_5",
		category: HookCategory::SocialProof,
		text: "O que {número} clientes têm em comum? Todos {resultado}",
		example: "O que 1.200 clientes têm em comum? Todos dobraram sua receita em 6 meses",
		tags: &["padrão", "comum", "resultado"],
	},
	HookRecord {
		id: "curiosity_6",
		category: HookCategory::Curiosity,
		text: "Todo mundo fala sobre {tema}, mas ninguém te conta {verdade}",
		example: "Todo mundo fala sobre empreendedorismo, mas ninguém te conta sobre as noites sem dormir",
		tags: &["verdade", "realidade", "contraste"],
	},
	HookRecord {
		id: "curiosity_7",
		category: HookCategory::Curiosity,
		text: "O que {pessoa famosa} fez diferente para {conquista}?",
		example: "O que Elon Musk fez diferente para revolucionar 3 indústrias ao mesmo tempo?",
		tags: &["diferencial", "sucesso", "referência"],
	},
	HookRecord {
		id: "curiosity_8",
		category: HookCategory::Curiosity,
		text: "Você já se perguntou por que {nicho} {ação} e ninguém fala sobre isso?",
		example: "Você já se perguntou por que designers de sucesso cobram 5x mais e ninguém fala sobre isso?",
		tags: &["pergunta", "misterioso", "revelação"],
	},
	HookRecord {
		id: "curiosity_9",
		category: HookCategory::Curiosity,
		text: "O segredo que {nicho} esconde sobre {tema} pode mudar tudo para você",
		example: "O segredo que empreendedores de sucesso escondem sobre produtividade pode mudar tudo para você",
		tags: &["segredo", "revelação", "transformação"],
	},
	HookRecord {
		id: "curiosity_10",
		category: HookCategory::Curiosity,
		text: "Por que {número}% dos {nicho} falham em {ação}? A resposta vai surpreendê-lo",
		example: "Por que 95% dos vendedores falham em fechar grandes negócios? A resposta vai surpreendê-lo",
		tags: &["estatística", "falha", "surpresa"],
	},
	HookRecord {
		id: "authority_6",
		category: HookCategory::Authority,
		text: "Depois de analisar {número} {casos/dados}, uma coisa ficou clara:",
		example: "Depois de analisar mais de 1000 campanhas de marketing, uma coisa ficou clara:",
		tags: &["análise", "dados", "conclusão"],
	},
	HookRecord {
		id: "authority_7",
		category: HookCategory::Authority,
		text: "Como especialista em {área}, vejo {problema} se repetindo constantemente",
		example: "Como especialista em vendas, vejo o mesmo erro se repetindo constantemente",
		tags: &["especialista", "padrão", "problema"],
	},
	HookRecord {
		id: "authority_8",
		category: HookCategory::Authority,
		text: "Se você já tentou {ação} e falhou, provavelmente cometeu {erro}",
		example: "Se você já tentou vender mais e falhou, provavelmente cometeu esses 3 erros básicos",
		tags: &["experiência", "erros", "aprendizado"],
	},
	HookRecord {
		id: "authority_9",
		category: HookCategory::Authority,
		text: "Na minha jornada de {tempo} como {profissão}, aprendi que {lição}",
		example: "Na minha jornada de 15 anos como copywriter, aprendi que a emoção vende mais que a lógica",
		tags: &["jornada", "experiência", "lição"],
	},
	HookRecord {
		id: "authority_10",
		category: HookCategory::Authority,
		text: "Como {cargo} na {empresa}, posso te mostrar como {ação} sem {dor}",
		example: "Como CMO na maior empresa do setor, posso te mostrar como escalar sem estressar sua equipe",
		tags: &["cargo", "empresa", "solução"],
	},
	HookRecord {
		id: "urgency_6",
		category: HookCategory::Urgency,
		text: "ATENÇÃO: {situação} pode acabar com sua {área} se você não {ação}",
		example: "ATENÇÃO: a concorrência pode acabar com sua empresa se você não inovar agora",
		tags: &["alerta", "risco", "ação"],
	},
	HookRecord {
		id: "urgency_7",
		category: HookCategory::Urgency,
		text: "Você tem {tempo} para {decisão} antes que seja tarde demais",
		example: "Você tem 24 horas para decidir seu futuro antes que seja tarde demais",
		tags: &["prazo", "decisão", "consequência"],
	},
	HookRecord {
		id: "urgency_8",
		category: HookCategory::Urgency,
		text: "Esta oferta expira em {tempo} - depois disso, o preço sobe para {valor}",
		example: "Esta oferta expira em 2 horas - depois disso, o preço sobe para R$ 1997",
		tags: &["oferta", "prazo", "preço"],
	},
	HookRecord {
		id: "urgency_9",
		category: HookCategory::Urgency,
		text: "Com a nova {regulamentação/tecnologia}, você tem até {data} para {ação}",
		example: "Com a nova LGPD, você tem até dezembro para adequar seu funil",
		tags: &["regulamentação", "prazo", "ação"],
	},
	HookRecord {
		id: "urgency_10",
		category: HookCategory::Urgency,
		text: "Só hoje: {desconto}% de desconto em {produto} + {bônus}",
		example: "Só hoje: 60% de desconto no curso completo + 3 bônus exclusivos",
		tags: &["oferta", "desconto", "bônus"],
	},
	HookRecord {
		id: "story_6",
		category: HookCategory::Storytelling,
		text: "Você já se sentiu {emoção} quando {situação}? Eu também...",
		example: "Você já se sentiu perdido quando todos ao seu redor pareciam ter sucesso? Eu também...",
		tags: &["empatia", "conexão", "sentimento"],
	},
	HookRecord {
		id: "story_7",
		category: HookCategory::Storytelling,
		text: "Esta é a história de como {situação} me ensinou {lição}",
		example: "Esta é a história de como perder tudo me ensinou o verdadeiro valor do dinheiro",
		tags: &["lição", "aprendizado", "história"],
	},
	HookRecord {
		id: "story_8",
		category: HookCategory::Storytelling,
		text: "Quando {evento} aconteceu, pensei que era {fim}. Mas então {virada}",
		example: "Quando meu negócio quebrou, pensei que era o fim da minha carreira. Mas então conheci o método que mudou tudo",
		tags: &["virada", "transformação", "esperança"],
	},
	HookRecord {
		id: "story_9",
		category: HookCategory::Storytelling,
		text: "Minha maior derrota se tornou meu maior {vitória/conquista}",
		example: "Minha maior derrota se tornou meu maior aprendizado como líder",
		tags: &["derrota", "vitória", "transformação"],
	},
	HookRecord {
		id: "story_10",
		category: HookCategory::Storytelling,
		text: "Se eu soubesse {informação} em {tempo}, teria evitado {consequência}",
		example: "Se eu soubesse dessa estratégia em 2020, teria evitado perder R$ 50 mil",
		tags: &["aprendizado", "retrospectiva", "dica"],
	},
	HookRecord {
		id: "social_6",
		category: HookCategory::SocialProof,
		text: "Resultado real: cliente {nome} conseguiu {resultado} em apenas {tempo}",
		example: "Resultado real: cliente Maria conseguiu 10x mais leads em apenas 30 dias",
		tags: &["real", "específico", "rápido"],
	},
	HookRecord {
		id: "social_7",
		category: HookCategory::SocialProof,
		text: "Este post já foi compartilhado {número} vezes. Quer saber por quê?",
		example: "Este post já foi compartilhado mais de 5000 vezes. Quer saber por quê?",
		tags: &["viral", "curiosidade", "engajamento"],
	},
	HookRecord {
		id: "social_8",
		category: HookCategory::SocialProof,
		text: "Veja o que {número} profissionais dizem sobre {produto/método}",
		example: "Veja o que 200 profissionais dizem sobre nosso método de copywriting",
		tags: &["aprovação", "profissionais", "produto"],
	},
	HookRecord {
		id: "social_9",
		category: HookCategory::SocialProof,
		text: "De {número} alunos, {porcentagem}% alcançaram {resultado}",
		example: "De 1500 alunos, 92% alcançaram resultados em menos de 60 dias",
		tags: &["estatística", "sucesso", "tempo"],
	},
	HookRecord {
		id: "social_10",
		category: HookCategory::SocialProof,
		text: "{Cargo} da {empresa} compartilha resultados inéditos de {ação}",
		example: "Diretor de Marketing da Magazine Luiza compartilha resultados inéditos da nova estratégia",
		tags: &["autoridade", "empresa", "resultados"],
	},
	HookRecord {
		id: "curiosity_11",
		category: HookCategory::Curiosity,
		text: "O que {nicho} não quer que você saiba sobre {tema} pode te custar {consequência}",
		example: "O que vendedores não querem que você saiba sobre negociação pode te custar milhões",
		tags: &["segredo", "custo", "revelação"],
	},
	HookRecord {
		id: "curiosity_12",
		category: HookCategory::Curiosity,
		text: "Por que {número}% dos {nicho} estão errados sobre {tema}?",
		example: "Por que 80% dos empreendedores estão errados sobre produtividade?",
		tags: &["erro", "estatística", "má prática"],
	},
	HookRecord {
		id: "authority_11",
		category: HookCategory::Authority,
		text: "Como {cargo} na {empresa}, vejo {nicho} cometer {erro} todos os dias",
		example: "Como CEO na maior empresa de educação do país, vejo empreendedores cometer o mesmo erro todos os dias",
		tags: &["cargo", "observação", "erro"],
	},
	HookRecord {
		id: "authority_12",
		category: HookCategory::Authority,
		text: "Após {tempo} estudando {tema}, descobri o verdadeiro {segredo}",
		example: "Após 10 anos estudando psicologia do consumidor, descobri o verdadeiro segredo da persuasão",
		tags: &["estudo", "descoberta", "segredo"],
	},
	HookRecord {
		id: "urgency_11",
		category: HookCategory::Urgency,
		text: "Preço aumenta em {tempo}: {desconto}% OFF agora ou pague {valor}",
		example: "Preço aumenta em 4 horas: 70% OFF agora ou pague o valor integral",
		tags: &["prazo", "desconto", "urgência"],
	},
	HookRecord {
		id: "urgency_12",
		category: HookCategory::Urgency,
		text: "Última chance: {evento} acontece só {data} e {número} vagas restantes",
		example: "Última chance: Workshop acontece só amanhã e 3 vagas restantes",
		tags: &["última chance", "evento", "escassez"],
	},
	HookRecord {
		id: "story_11",
		category: HookCategory::Storytelling,
		text: "Era uma vez {personagem} que {situação}. Mas tudo mudou quando {virada}",
		example: "Era uma vez um designer que estava falindo. Mas tudo mudou quando descobriu essa técnica",
		tags: &["narrativa", "transformação", "virada"],
	},
	HookRecord {
		id: "story_12",
		category: HookCategory::Storytelling,
		text: "Se {evento} não tivesse acontecido, eu nunca teria descoberto {segredo}",
		example: "Se meu primeiro negócio não tivesse falido, eu nunca teria descoberto o segredo da escala",
		tags: &["experiência", "descoberta", "segredo"],
	},
	HookRecord {
		id: "social_11",
		category: HookCategory::SocialProof,
		text: "{Número} depoimentos não mentem: {resultado}",
		example: "2500 depoimentos não mentem: método que triplica conversões",
		tags: &["depoimentos", "prova", "resultado"],
	},
	HookRecord {
		id: "social_12",
		category: HookCategory::SocialProof,
		text: "Veja por que {empresa/nicho} confia em {produto/serviço}",
		example: "Veja por que 500 marcas confiam em nossa plataforma de automação",
		tags: &["confiança", "empresas", "produto"],
	},
];
