//! English texts.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    // Navigation / common
    ("app.name", "EXFORM"),
    ("nav.home", "Home"),
    ("nav.about", "About"),
    ("nav.services", "Services"),
    ("nav.laboratory", "Laboratory"),
    ("nav.training", "Training"),
    ("nav.contact", "Contact"),
    ("nav.register", "Register"),
    ("lang.label", "Language"),
    ("common.learn_more", "Learn more"),
    ("common.back_home", "Back to home"),
    ("common.services_badge", "Our Services"),
    ("toast.dismiss", "Dismiss"),
    ("footer.quick_links", "Quick links"),
    ("footer.rights", "All rights reserved."),
    // Hero
    ("hero.title", "Technical Expertise & Professional Training"),
    ("hero.subtitle", "Excellence, Innovation and Professionalism serving your development"),
    ("hero.cta", "Discover our services"),
    ("hero.cta_secondary", "See our training"),
    // Home
    ("home.stats.clients", "Satisfied Clients"),
    ("home.stats.experience", "Years of Experience"),
    ("home.stats.formations", "Training Sessions Delivered"),
    ("home.services.subtitle", "Discover our complete range of technical services and professional training"),
    ("home.why.title", "Why Choose EXFORM?"),
    ("home.why.subtitle", "With over 15 years of experience, EXFORM is the reference partner for your technical expertise and professional training needs."),
    ("home.why.point1", "Certified and recognized technical expertise"),
    ("home.why.point2", "Training tailored to market needs"),
    ("home.why.point3", "Laboratory equipped to international standards"),
    ("home.why.point4", "Personalized support for your projects"),
    ("home.cta.title", "Ready to Develop Your Skills?"),
    ("home.cta.subtitle", "Contact us today to discuss your training and technical expertise needs"),
    ("home.faq.title", "Frequently Asked Questions"),
    ("home.partners.title", "Our Trusted Partners"),
    ("home.partners.subtitle", "We work with industry leaders to bring you the best solutions"),
    ("home.faq.q1", "Are your training courses certified?"),
    ("home.faq.a1", "Every course ends with a completion certificate issued by EXFORM."),
    ("home.faq.q2", "What kinds of analyses do you perform?"),
    ("home.faq.a2", "Water, air, dust, noise and environment, following ISO and HACCP standards."),
    ("home.faq.q3", "Do you work outside Abidjan?"),
    ("home.faq.a3", "Yes, our teams travel to your sites anywhere in Côte d'Ivoire."),
    // About
    ("about.title", "About EXFORM"),
    ("about.subtitle", "Our mission, our values, our vision"),
    ("about.mission.title", "Our Mission"),
    ("about.mission.body", "Helping companies and professionals master their installations through analysis, training and technical expertise."),
    ("about.values.title", "Our Values"),
    ("about.values.excellence", "Excellence"),
    ("about.values.excellence.body", "Services that meet international standards."),
    ("about.values.innovation", "Innovation"),
    ("about.values.innovation.body", "Methods and equipment that are constantly updated."),
    ("about.values.professionalism", "Professionalism"),
    ("about.values.professionalism.body", "Experienced and committed trainers and analysts."),
    ("about.vision.title", "Our Vision"),
    ("about.vision.body", "To become the regional reference for technical expertise and industrial trades training."),
    ("about.cta", "Contact us"),
    // Services
    ("services.title", "Discover our cutting-edge services"),
    ("services.subtitle", "Four areas of expertise serving industry"),
    ("services.laboratory", "Physico-chemical analysis laboratory"),
    ("services.laboratory.body", "Water, air, dust and noise analyses following ISO and HACCP standards."),
    ("services.training", "Qualifying continuing education"),
    ("services.training.body", "Hands-on programs for technicians, engineers and supervisors."),
    ("services.construction", "Construction and industrial equipment"),
    ("services.construction.body", "Design, installation and follow-up of industrial equipment and structures."),
    ("services.maintenance", "Multi-mechanical and industrial maintenance"),
    ("services.maintenance.body", "Diagnosis, preventive and corrective maintenance of your machines."),
    // Laboratory
    ("lab.title", "Analysis Laboratory"),
    ("lab.subtitle", "Physico-chemical expertise, ISO, HACCP, complete analyses"),
    ("lab.cta", "Contact us for your analyses"),
    ("lab.domains.title", "Our analysis domains"),
    ("lab.domain.water", "Water"),
    ("lab.domain.water.body", "Drinking water, process water and discharges."),
    ("lab.domain.air", "Air"),
    ("lab.domain.air.body", "Indoor air quality and emissions."),
    ("lab.domain.dust", "Dust"),
    ("lab.domain.dust.body", "Particle measurements at workstations."),
    ("lab.domain.noise", "Noise"),
    ("lab.domain.noise.body", "Noise mapping and operator exposure."),
    ("lab.domain.environment", "Environment"),
    ("lab.domain.environment.body", "Environmental monitoring of your sites."),
    ("lab.standards.title", "Standards and frameworks"),
    ("lab.standards.body", "Our methods follow ISO and HACCP frameworks and reports are delivered within 48 hours to 5 working days."),
    // Training
    ("training.title", "Our Training"),
    ("training.subtitle", "Hands-on courses led by field experts"),
    ("training.register", "Register"),
    ("training.vibration", "Vibration analysis"),
    ("training.vibration.summary", "Diagnose faults in rotating machinery."),
    ("training.hydraulics", "Hydraulics"),
    ("training.hydraulics.summary", "Understand, troubleshoot and maintain hydraulic circuits."),
    ("training.ammonia", "Ammonia"),
    ("training.ammonia.summary", "Prevent ammonia risks in refrigeration plants."),
    ("training.filtration", "Air filtration"),
    ("training.filtration.summary", "Select and maintain air filtration systems."),
    ("training.pressure", "Pressure/Autoclave"),
    ("training.pressure.summary", "Operate pressure equipment safely."),
    ("training.management", "Management"),
    ("training.management.summary", "Lead a maintenance team and drive performance."),
    ("training.custom.title", "On-site training"),
    ("training.custom.body", "We run our courses at your premises, tailored to your equipment."),
    // Contact
    ("contact.title", "Contact Us"),
    ("contact.subtitle", "We are here to answer all your questions and support you in your projects"),
    ("contact.address", "Yopougon – opposite the CHU"),
    ("contact.form.title", "Send us a Message"),
    ("contact.form.first_name", "First name"),
    ("contact.form.first_name.placeholder", "Your first name"),
    ("contact.form.last_name", "Last name"),
    ("contact.form.last_name.placeholder", "Your last name"),
    ("contact.form.email", "Email"),
    ("contact.form.email.placeholder", "your.email@example.com"),
    ("contact.form.message", "Message"),
    ("contact.form.message.placeholder", "Describe your need or question..."),
    ("contact.form.send", "Send"),
    ("contact.form.sending", "Sending..."),
    ("contact.info.title", "Our Contact Information"),
    ("contact.info.address", "Address"),
    ("contact.info.email", "Email"),
    ("contact.info.phone", "Phone"),
    ("contact.info.hours", "Hours"),
    ("contact.hours.weekday", "Monday - Friday: 8am - 6pm"),
    ("contact.hours.saturday", "Saturday: 8am - 1pm"),
    ("contact.map.title", "Our Location"),
    ("contact.map.subtitle", "Find us easily in Yopougon, opposite the CHU"),
    ("contact.map.open", "View larger map"),
    ("contact.faq.title", "Frequently Asked Questions"),
    ("contact.faq.q1", "What are your response times?"),
    ("contact.faq.a1", "We commit to responding to any request within 24 business hours."),
    ("contact.faq.q2", "Do you offer on-site training?"),
    ("contact.faq.a2", "Yes, we can organize training directly at your premises according to your needs."),
    ("contact.faq.q3", "How do I get a quote for an analysis?"),
    ("contact.faq.a3", "Contact us with the details of your needs, we will provide you with a free quote within 48 hours."),
    ("contact.quick.training", "Register for training"),
    ("contact.quick.analysis", "Request an analysis"),
    ("contact.toast.success", "Message sent!"),
    ("contact.toast.description", "We will contact you very soon."),
    // Registration
    ("register.title", "Training Registration"),
    ("register.subtitle", "Hello, please fill out the form to register for a training course"),
    ("register.submit", "Register"),
    ("register.submitting", "Registering..."),
    ("register.next", "Next"),
    ("register.previous", "Previous"),
    ("register.back_to_catalog", "Back to training"),
    ("register.required_hint", "* required fields"),
    ("register.step.personal", "Personal information"),
    ("register.step.professional", "Professional information"),
    ("register.step.training", "Training choice"),
    ("register.first_name", "First name *"),
    ("register.first_name.placeholder", "Your first name"),
    ("register.last_name", "Last name *"),
    ("register.last_name.placeholder", "Your last name"),
    ("register.email", "Email *"),
    ("register.email.placeholder", "your.email@example.com"),
    ("register.phone", "Phone *"),
    ("register.phone.placeholder", "+225 07 00 00 00 00"),
    ("register.company", "Company *"),
    ("register.company.placeholder", "Your company name"),
    ("register.position", "Position *"),
    ("register.position.placeholder", "Your current position"),
    ("register.experience", "Years of experience"),
    ("register.experience.placeholder", "Select your experience level"),
    ("register.experience.0_2", "0-2 years"),
    ("register.experience.3_5", "3-5 years"),
    ("register.experience.6_10", "6-10 years"),
    ("register.experience.10_plus", "More than 10 years"),
    ("register.training", "Desired training *"),
    ("register.training.placeholder", "Choose your training"),
    ("register.start_date", "Desired start date *"),
    ("register.motivation", "Motivation / Objectives"),
    ("register.motivation.placeholder", "Describe your objectives and motivations for this training..."),
    ("register.toast.success", "Registration successful!"),
    ("register.toast.description", "We will contact you within 48 hours to confirm your registration."),
    // Form errors
    ("form.invalid.title", "Please check the form"),
    ("form.failure.title", "Sending failed"),
    ("form.failure.body", "Something went wrong. Please try again in a moment."),
    ("validation.first_name", "First name must be between 2 and 100 characters."),
    ("validation.last_name", "Last name must be between 2 and 100 characters."),
    ("validation.email", "The email address is not valid."),
    ("validation.email_length", "The email address must not exceed 255 characters."),
    ("validation.phone", "The phone number is not valid."),
    ("validation.company", "Company must be between 2 and 200 characters."),
    ("validation.position", "Position must be between 2 and 100 characters."),
    ("validation.training", "Please choose a training course."),
    ("validation.start_date", "Please provide a start date."),
    ("validation.motivation", "Motivation must not exceed 2000 characters."),
    ("validation.message", "The message must be between 10 and 1000 characters."),
    // Thanks
    ("thanks.title", "Thank You!"),
    ("thanks.message", "We will contact you very soon"),
    ("thanks.next.title", "Next Steps"),
    ("thanks.next.step1", "Our team reviews your request."),
    ("thanks.next.step2", "An advisor calls you within 48 hours to confirm the details."),
    ("thanks.next.step3", "You receive your invitation and the course program."),
    ("thanks.question", "A question? Contact us"),
    ("thanks.more_training", "See other training"),
    // Not found
    ("not_found.title", "Page not found"),
    ("not_found.body", "The page you are looking for does not exist or has been moved."),
    // Assistant
    ("chat.title", "EXFORM Assistant"),
    ("chat.status", "Online"),
    ("chat.placeholder", "Type your message..."),
    ("chat.send", "Send"),
    ("chat.open", "Open the assistant"),
    ("whatsapp.open", "Message us on WhatsApp"),
    ("chat.close", "Close the assistant"),
    ("chat.greeting", "Hello! I'm EXFORM's virtual assistant. How can I help you today?"),
    ("chat.reply.services", "EXFORM offers three main services: Physico-chemical Analysis Laboratory, Qualifying Continuing Education, and Construction & Industrial Equipment. Would you like to know more about any of these services?"),
    ("chat.reply.laboratory", "Our laboratory offers complete analyses according to ISO and HACCP standards. We cover water, air, dust, noise and environmental analyses."),
    ("chat.reply.training", "Our training includes vibration analysis, hydraulics, sealing systems, ammonia-related risks, and much more. Would you like to register?"),
    ("chat.reply.contact", "You can contact us in Yopougon opposite the CHU, or use our online contact form. Our team will respond quickly."),
    ("chat.reply.default", "Thank you for your question. For detailed information, please contact us directly or visit our services pages."),
];
