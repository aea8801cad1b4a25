//! Textes français.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    // Navigation / commun
    ("app.name", "EXFORM"),
    ("nav.home", "Accueil"),
    ("nav.about", "Présentation"),
    ("nav.services", "Services"),
    ("nav.laboratory", "Laboratoire"),
    ("nav.training", "Formations"),
    ("nav.contact", "Contact"),
    ("nav.register", "S'inscrire"),
    ("lang.label", "Langue"),
    ("common.learn_more", "En savoir plus"),
    ("common.back_home", "Retour à l'accueil"),
    ("common.services_badge", "Nos Services"),
    ("toast.dismiss", "Fermer"),
    ("footer.quick_links", "Liens rapides"),
    ("footer.rights", "Tous droits réservés."),
    // Hero
    ("hero.title", "Expertise Technique & Formation aux Métiers"),
    ("hero.subtitle", "Excellence, Innovation et Professionnalisme au service de votre développement"),
    ("hero.cta", "Découvrir nos services"),
    ("hero.cta_secondary", "Voir nos formations"),
    // Accueil
    ("home.stats.clients", "Clients Satisfaits"),
    ("home.stats.experience", "Années d'Expérience"),
    ("home.stats.formations", "Formations Dispensées"),
    ("home.services.subtitle", "Découvrez notre gamme complète de services techniques et de formations professionnelles"),
    ("home.why.title", "Pourquoi Choisir EXFORM ?"),
    ("home.why.subtitle", "Avec plus de 15 ans d'expérience, EXFORM s'impose comme le partenaire de référence pour vos besoins en expertise technique et formation professionnelle."),
    ("home.why.point1", "Expertise technique certifiée et reconnue"),
    ("home.why.point2", "Formations adaptées aux besoins du marché"),
    ("home.why.point3", "Laboratoire équipé aux normes internationales"),
    ("home.why.point4", "Accompagnement personnalisé de vos projets"),
    ("home.cta.title", "Prêt à Développer Vos Compétences ?"),
    ("home.cta.subtitle", "Contactez-nous dès aujourd'hui pour discuter de vos besoins en formation et expertise technique"),
    ("home.faq.title", "Questions Fréquentes"),
    ("home.partners.title", "Nos Partenaires de Confiance"),
    ("home.partners.subtitle", "Nous collaborons avec les leaders de l'industrie pour vous offrir les meilleures solutions"),
    ("home.faq.q1", "Vos formations sont-elles certifiantes ?"),
    ("home.faq.a1", "Chaque formation est sanctionnée par une attestation de fin de formation délivrée par EXFORM."),
    ("home.faq.q2", "Quels types d'analyses réalisez-vous ?"),
    ("home.faq.a2", "Eau, air, poussières, bruit et environnement, selon les normes ISO et HACCP."),
    ("home.faq.q3", "Intervenez-vous hors d'Abidjan ?"),
    ("home.faq.a3", "Oui, nos équipes se déplacent sur vos sites partout en Côte d'Ivoire."),
    // Présentation
    ("about.title", "À propos d'EXFORM"),
    ("about.subtitle", "Notre mission, nos valeurs, notre vision"),
    ("about.mission.title", "Notre Mission"),
    ("about.mission.body", "Accompagner les entreprises et les professionnels dans la maîtrise de leurs installations grâce à l'analyse, la formation et l'expertise technique."),
    ("about.values.title", "Nos Valeurs"),
    ("about.values.excellence", "Excellence"),
    ("about.values.excellence.body", "Des prestations conformes aux standards internationaux."),
    ("about.values.innovation", "Innovation"),
    ("about.values.innovation.body", "Des méthodes et des équipements constamment mis à jour."),
    ("about.values.professionalism", "Professionnalisme"),
    ("about.values.professionalism.body", "Des formateurs et analystes expérimentés et engagés."),
    ("about.vision.title", "Notre Vision"),
    ("about.vision.body", "Devenir la référence régionale de l'expertise technique et de la formation aux métiers de l'industrie."),
    ("about.cta", "Contactez-nous"),
    // Services
    ("services.title", "Découvrez nos services de pointe"),
    ("services.subtitle", "Quatre pôles d'expertise au service de l'industrie"),
    ("services.laboratory", "Laboratoire d'analyse physico-chimique"),
    ("services.laboratory.body", "Analyses d'eau, d'air, de poussières et de bruit selon les normes ISO et HACCP."),
    ("services.training", "Formation continue qualifiante"),
    ("services.training.body", "Des programmes pratiques pour techniciens, ingénieurs et encadrement."),
    ("services.construction", "BTP et équipements industriels"),
    ("services.construction.body", "Études, installation et suivi d'équipements industriels et d'ouvrages."),
    ("services.maintenance", "Pluri-mécanique et maintenance industrielle"),
    ("services.maintenance.body", "Diagnostic, maintenance préventive et corrective de vos machines."),
    // Laboratoire
    ("lab.title", "Laboratoire d'Analyse"),
    ("lab.subtitle", "Expertise physico-chimique, ISO, HACCP, analyses complètes"),
    ("lab.cta", "Contactez-nous pour vos analyses"),
    ("lab.domains.title", "Nos domaines d'analyse"),
    ("lab.domain.water", "Eau"),
    ("lab.domain.water.body", "Eaux de consommation, de process et rejets."),
    ("lab.domain.air", "Air"),
    ("lab.domain.air.body", "Qualité de l'air intérieur et émissions."),
    ("lab.domain.dust", "Poussières"),
    ("lab.domain.dust.body", "Mesure des particules sur postes de travail."),
    ("lab.domain.noise", "Bruit"),
    ("lab.domain.noise.body", "Cartographie sonore et exposition des opérateurs."),
    ("lab.domain.environment", "Environnement"),
    ("lab.domain.environment.body", "Suivi environnemental de vos sites."),
    ("lab.standards.title", "Normes et référentiels"),
    ("lab.standards.body", "Nos méthodes suivent les référentiels ISO et HACCP et nos rapports sont remis sous 48h à 5 jours ouvrés."),
    // Formations
    ("training.title", "Nos Formations"),
    ("training.subtitle", "Des formations pratiques animées par des experts du terrain"),
    ("training.register", "Je m'inscris"),
    ("training.vibration", "Analyse vibratoire"),
    ("training.vibration.summary", "Diagnostiquer les défauts des machines tournantes."),
    ("training.hydraulics", "Hydraulique"),
    ("training.hydraulics.summary", "Comprendre, dépanner et entretenir les circuits hydrauliques."),
    ("training.ammonia", "Ammoniac"),
    ("training.ammonia.summary", "Prévenir les risques liés à l'ammoniac en installation frigorifique."),
    ("training.filtration", "Filtration air"),
    ("training.filtration.summary", "Choisir et maintenir les systèmes de filtration d'air."),
    ("training.pressure", "Pression/Autoclave"),
    ("training.pressure.summary", "Exploiter en sécurité les équipements sous pression."),
    ("training.management", "Management"),
    ("training.management.summary", "Animer une équipe de maintenance et piloter la performance."),
    ("training.custom.title", "Formations sur site"),
    ("training.custom.body", "Nous organisons nos formations dans vos locaux, adaptées à vos équipements."),
    // Contact
    ("contact.title", "Contactez-nous"),
    ("contact.subtitle", "Nous sommes à votre écoute pour répondre à toutes vos questions et vous accompagner dans vos projets"),
    ("contact.address", "Yopougon – en face du CHU"),
    ("contact.form.title", "Envoyez-nous un Message"),
    ("contact.form.first_name", "Prénom"),
    ("contact.form.first_name.placeholder", "Votre prénom"),
    ("contact.form.last_name", "Nom"),
    ("contact.form.last_name.placeholder", "Votre nom"),
    ("contact.form.email", "Email"),
    ("contact.form.email.placeholder", "votre.email@exemple.com"),
    ("contact.form.message", "Message"),
    ("contact.form.message.placeholder", "Décrivez votre besoin ou votre question..."),
    ("contact.form.send", "Envoyer"),
    ("contact.form.sending", "Envoi en cours..."),
    ("contact.info.title", "Nos Coordonnées"),
    ("contact.info.address", "Adresse"),
    ("contact.info.email", "Email"),
    ("contact.info.phone", "Téléphone"),
    ("contact.info.hours", "Horaires"),
    ("contact.hours.weekday", "Lundi - Vendredi: 8h - 18h"),
    ("contact.hours.saturday", "Samedi: 8h - 13h"),
    ("contact.map.title", "Notre Localisation"),
    ("contact.map.subtitle", "Retrouvez-nous facilement à Yopougon, en face du CHU"),
    ("contact.map.open", "Agrandir la carte"),
    ("contact.faq.title", "Questions Fréquentes"),
    ("contact.faq.q1", "Quels sont vos délais de réponse ?"),
    ("contact.faq.a1", "Nous nous engageons à répondre à toute demande dans les 24h ouvrées."),
    ("contact.faq.q2", "Proposez-vous des formations sur site ?"),
    ("contact.faq.a2", "Oui, nous pouvons organiser des formations directement dans vos locaux selon vos besoins."),
    ("contact.faq.q3", "Comment obtenir un devis pour une analyse ?"),
    ("contact.faq.a3", "Contactez-nous avec les détails de votre besoin, nous vous fournirons un devis gratuit sous 48h."),
    ("contact.quick.training", "S'inscrire à une formation"),
    ("contact.quick.analysis", "Demander une analyse"),
    ("contact.toast.success", "Message envoyé !"),
    ("contact.toast.description", "Nous vous contacterons très bientôt."),
    // Inscription
    ("register.title", "Inscription à une formation"),
    ("register.subtitle", "Bonjour, veuillez remplir le formulaire pour vous inscrire à une formation"),
    ("register.submit", "S'inscrire"),
    ("register.submitting", "Inscription en cours..."),
    ("register.next", "Suivant"),
    ("register.previous", "Précédent"),
    ("register.back_to_catalog", "Retour aux formations"),
    ("register.required_hint", "* champs obligatoires"),
    ("register.step.personal", "Informations personnelles"),
    ("register.step.professional", "Informations professionnelles"),
    ("register.step.training", "Choix de formation"),
    ("register.first_name", "Prénom *"),
    ("register.first_name.placeholder", "Votre prénom"),
    ("register.last_name", "Nom *"),
    ("register.last_name.placeholder", "Votre nom"),
    ("register.email", "Email *"),
    ("register.email.placeholder", "votre.email@exemple.com"),
    ("register.phone", "Téléphone *"),
    ("register.phone.placeholder", "+225 07 00 00 00 00"),
    ("register.company", "Entreprise *"),
    ("register.company.placeholder", "Nom de votre entreprise"),
    ("register.position", "Poste occupé *"),
    ("register.position.placeholder", "Votre poste actuel"),
    ("register.experience", "Années d'expérience"),
    ("register.experience.placeholder", "Sélectionnez votre niveau d'expérience"),
    ("register.experience.0_2", "0-2 ans"),
    ("register.experience.3_5", "3-5 ans"),
    ("register.experience.6_10", "6-10 ans"),
    ("register.experience.10_plus", "Plus de 10 ans"),
    ("register.training", "Formation souhaitée *"),
    ("register.training.placeholder", "Choisissez votre formation"),
    ("register.start_date", "Date de début souhaitée *"),
    ("register.motivation", "Motivation / Objectifs"),
    ("register.motivation.placeholder", "Décrivez vos objectifs et motivations pour cette formation..."),
    ("register.toast.success", "Inscription réussie !"),
    ("register.toast.description", "Nous vous contacterons sous 48h pour confirmer votre inscription."),
    // Erreurs de formulaire
    ("form.invalid.title", "Vérifiez le formulaire"),
    ("form.failure.title", "Échec de l'envoi"),
    ("form.failure.body", "Une erreur est survenue. Veuillez réessayer dans un instant."),
    ("validation.first_name", "Le prénom doit contenir entre 2 et 100 caractères."),
    ("validation.last_name", "Le nom doit contenir entre 2 et 100 caractères."),
    ("validation.email", "L'adresse email n'est pas valide."),
    ("validation.email_length", "L'adresse email ne doit pas dépasser 255 caractères."),
    ("validation.phone", "Le numéro de téléphone n'est pas valide."),
    ("validation.company", "L'entreprise doit contenir entre 2 et 200 caractères."),
    ("validation.position", "Le poste doit contenir entre 2 et 100 caractères."),
    ("validation.training", "Veuillez choisir une formation."),
    ("validation.start_date", "Veuillez indiquer une date de début."),
    ("validation.motivation", "La motivation ne doit pas dépasser 2000 caractères."),
    ("validation.message", "Le message doit contenir entre 10 et 1000 caractères."),
    // Merci
    ("thanks.title", "Merci !"),
    ("thanks.message", "Nous vous contacterons très bientôt"),
    ("thanks.next.title", "Prochaines Étapes"),
    ("thanks.next.step1", "Notre équipe examine votre demande."),
    ("thanks.next.step2", "Un conseiller vous appelle sous 48h pour confirmer les détails."),
    ("thanks.next.step3", "Vous recevez votre convocation et le programme de la formation."),
    ("thanks.question", "Une question ? Contactez-nous"),
    ("thanks.more_training", "Voir d'autres formations"),
    // Page introuvable
    ("not_found.title", "Page introuvable"),
    ("not_found.body", "La page que vous cherchez n'existe pas ou a été déplacée."),
    // Assistant
    ("chat.title", "Assistant EXFORM"),
    ("chat.status", "En ligne"),
    ("chat.placeholder", "Tapez votre message..."),
    ("chat.send", "Envoyer"),
    ("chat.open", "Ouvrir l'assistant"),
    ("whatsapp.open", "Nous écrire sur WhatsApp"),
    ("chat.close", "Fermer l'assistant"),
    ("chat.greeting", "Bonjour! Je suis l'assistant virtuel d'EXFORM. Comment puis-je vous aider aujourd'hui?"),
    ("chat.reply.services", "EXFORM offre trois services principaux : Laboratoire d'analyse physico-chimique, Formation continue qualifiante, et BTP & équipements industriels. Voulez-vous en savoir plus sur l'un de ces services ?"),
    ("chat.reply.laboratory", "Notre laboratoire propose des analyses complètes selon les normes ISO et HACCP. Nous couvrons les analyses d'eau, air, poussière, son et environnement."),
    ("chat.reply.training", "Nos formations incluent l'analyse vibratoire, hydraulique, systèmes d'étanchéité, risques liés à l'ammoniac, et bien plus. Souhaitez-vous vous inscrire ?"),
    ("chat.reply.contact", "Vous pouvez nous contacter à Yopougon en face du CHU, ou utiliser notre formulaire de contact en ligne. Notre équipe vous répondra rapidement."),
    ("chat.reply.default", "Je vous remercie pour votre question. Pour des informations détaillées, je vous invite à nous contacter directement ou à consulter nos pages de services."),
];
