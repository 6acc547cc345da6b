//! Static translation tables, flattened to dotted keys and sorted by key.
//!
//! English is the complete catalog. The other languages only cover the
//! navigation shell so far; everything else falls back to English when the
//! catalogs are merged.

pub const EN: &[(&str, &str)] = &[
    ("auth.accountCreated", "Account created successfully! You can now sign in."),
    ("auth.email", "Email"),
    ("auth.password", "Password"),
    ("auth.role.employer", "Employer"),
    ("auth.role.select", "I am a..."),
    ("auth.role.worker", "Worker"),
    ("auth.signIn", "Sign in"),
    ("auth.signOut", "Sign out"),
    ("auth.signUp", "Sign up"),
    ("common.cancel", "Cancel"),
    ("common.close", "Close"),
    ("common.delete", "Delete"),
    ("common.edit", "Edit"),
    ("common.error", "Error"),
    ("common.loading", "Loading..."),
    ("common.save", "Save"),
    ("common.search", "Search"),
    ("common.submit", "Submit"),
    ("common.success", "Success"),
    ("jobs.about", "About"),
    ("jobs.accept", "Accept"),
    ("jobs.accepted", "Accepted"),
    ("jobs.acceptedWorkers", "Accepted workers"),
    ("jobs.activeJobs", "Active jobs"),
    ("jobs.allApplications", "All applications"),
    ("jobs.alreadyApplied", "You have already applied to this job"),
    ("jobs.applicationSubmitted", "Application submitted successfully!"),
    ("jobs.applications", "applications"),
    ("jobs.applyNow", "Apply Now"),
    ("jobs.applying", "Applying..."),
    ("jobs.checkBackLater", "Check back later for new opportunities."),
    ("jobs.closeJob", "Close Job"),
    ("jobs.closedSuccess", "Job closed successfully"),
    ("jobs.completedJobs", "Completed jobs"),
    ("jobs.completedJobsWillAppear", "Jobs you complete will appear here."),
    ("jobs.completedSuccess", "Job completed successfully"),
    ("jobs.contactInformation", "Contact Information"),
    ("jobs.deleteJob", "Delete"),
    ("jobs.deleted", "Job deleted successfully"),
    ("jobs.editJob", "Edit"),
    ("jobs.employerRated", "You rated this employer"),
    ("jobs.filters", "Filters"),
    ("jobs.hideContact", "Hide Contact"),
    ("jobs.loadApplicationsError", "Failed to load applications"),
    ("jobs.loadError", "Failed to load jobs"),
    ("jobs.markCompleted", "Mark Completed"),
    ("jobs.noAcceptedWorkers", "No accepted workers yet"),
    ("jobs.noActiveApplications", "No active applications"),
    ("jobs.noApplications", "No applications yet"),
    ("jobs.noBio", "No bio provided"),
    ("jobs.noCompletedJobs", "No completed jobs"),
    ("jobs.noJobsAvailable", "No jobs available"),
    ("jobs.noLocation", "No location specified"),
    ("jobs.noSkills", "No skills listed"),
    ("jobs.pending", "Pending"),
    ("jobs.pendingApplicationsError", "Please accept or reject all pending applications first"),
    ("jobs.pendingReview", "Pending review"),
    ("jobs.postNewJob", "Post New Job"),
    ("jobs.posted", "Job posted successfully"),
    ("jobs.rateEmployer", "Rate this employer"),
    ("jobs.rateWorker", "Rate this worker"),
    ("jobs.rateWorkers", "Rate Workers"),
    ("jobs.rated", "Rated"),
    ("jobs.rating", "Rating"),
    ("jobs.ratingError", "Failed to submit rating"),
    ("jobs.ratingSubmitted", "Rating submitted successfully!"),
    ("jobs.reject", "Reject"),
    ("jobs.rejected", "Rejected"),
    ("jobs.searchApplications", "Search applications..."),
    ("jobs.searchJobs", "Search jobs..."),
    ("jobs.selectRating", "Please select a rating"),
    ("jobs.selectStatus", "Select status"),
    ("jobs.selectWage", "Select wage range"),
    ("jobs.showContact", "Show Contact"),
    ("jobs.signInToApply", "Please sign in to apply for jobs"),
    ("jobs.skills", "Skills"),
    ("jobs.startApplying", "Start applying to jobs to see them here."),
    ("jobs.submitRating", "Submit Rating"),
    ("jobs.updateApplicationError", "Failed to update application"),
    ("jobs.updated", "Job updated successfully"),
    ("jobs.viewApplications", "View Applications"),
    ("jobs.viewWorkers", "View Workers"),
    ("navigation.appliedJobs", "Applied jobs"),
    ("navigation.findJobs", "Find jobs"),
    ("navigation.myJobs", "My jobs"),
    ("navigation.notifications", "Notifications"),
    ("navigation.pastWorkers", "Past workers"),
    ("navigation.profile", "Profile"),
    ("navigation.settings", "Settings"),
    ("profile.hidden", "Profile is now hidden from other workers"),
    ("profile.updated", "Profile updated successfully"),
    ("profile.visible", "Profile is now visible to other workers"),
    ("settings.language.select", "Select language"),
    ("settings.language.title", "Language"),
    ("settings.title", "Settings"),
];

pub const ES: &[(&str, &str)] = &[
    ("auth.email", "Correo electrónico"),
    ("auth.password", "Contraseña"),
    ("auth.role.employer", "Empleador"),
    ("auth.role.select", "Soy un..."),
    ("auth.role.worker", "Trabajador"),
    ("auth.signIn", "Iniciar sesión"),
    ("auth.signOut", "Cerrar sesión"),
    ("auth.signUp", "Registrarse"),
    ("common.cancel", "Cancelar"),
    ("common.close", "Cerrar"),
    ("common.delete", "Eliminar"),
    ("common.edit", "Editar"),
    ("common.error", "Error"),
    ("common.loading", "Cargando..."),
    ("common.save", "Guardar"),
    ("common.search", "Buscar"),
    ("common.submit", "Enviar"),
    ("common.success", "Éxito"),
    ("navigation.appliedJobs", "Trabajos aplicados"),
    ("navigation.findJobs", "Buscar trabajos"),
    ("navigation.myJobs", "Mis trabajos"),
    ("navigation.notifications", "Notificaciones"),
    ("navigation.pastWorkers", "Trabajadores anteriores"),
    ("navigation.profile", "Perfil"),
    ("navigation.settings", "Configuración"),
    ("settings.language.select", "Seleccionar idioma"),
    ("settings.language.title", "Idioma"),
    ("settings.title", "Configuración"),
];

pub const HI: &[(&str, &str)] = &[
    ("auth.email", "ईमेल"),
    ("auth.password", "पासवर्ड"),
    ("auth.role.employer", "नियोक्ता"),
    ("auth.role.select", "मैं एक..."),
    ("auth.role.worker", "कर्मचारी"),
    ("auth.signIn", "साइन इन करें"),
    ("auth.signOut", "साइन आउट करें"),
    ("auth.signUp", "साइन अप करें"),
    ("common.cancel", "रद्द करें"),
    ("common.close", "बंद करें"),
    ("common.delete", "हटाएं"),
    ("common.edit", "संपादित करें"),
    ("common.error", "त्रुटि"),
    ("common.loading", "लोड हो रहा है..."),
    ("common.save", "सहेजें"),
    ("common.search", "खोजें"),
    ("common.submit", "जमा करें"),
    ("common.success", "सफलता"),
    ("navigation.appliedJobs", "आवेदित नौकरियां"),
    ("navigation.findJobs", "नौकरी खोजें"),
    ("navigation.myJobs", "मेरी नौकरियां"),
    ("navigation.notifications", "सूचनाएं"),
    ("navigation.pastWorkers", "पिछले कर्मचारी"),
    ("navigation.profile", "प्रोफ़ाइल"),
    ("navigation.settings", "सेटिंग्स"),
    ("settings.language.select", "भाषा चुनें"),
    ("settings.language.title", "भाषा"),
    ("settings.title", "सेटिंग्स"),
];

pub const AR: &[(&str, &str)] = &[
    ("auth.email", "البريد الإلكتروني"),
    ("auth.password", "كلمة المرور"),
    ("auth.role.employer", "صاحب عمل"),
    ("auth.role.select", "أنا..."),
    ("auth.role.worker", "عامل"),
    ("auth.signIn", "تسجيل الدخول"),
    ("auth.signOut", "تسجيل الخروج"),
    ("auth.signUp", "إنشاء حساب"),
    ("common.cancel", "إلغاء"),
    ("common.close", "إغلاق"),
    ("common.delete", "حذف"),
    ("common.edit", "تعديل"),
    ("common.error", "خطأ"),
    ("common.loading", "جاري التحميل..."),
    ("common.save", "حفظ"),
    ("common.search", "بحث"),
    ("common.submit", "إرسال"),
    ("common.success", "نجاح"),
    ("navigation.appliedJobs", "الوظائف المتقدم لها"),
    ("navigation.findJobs", "البحث عن وظائف"),
    ("navigation.myJobs", "وظائفي"),
    ("navigation.notifications", "الإشعارات"),
    ("navigation.pastWorkers", "العمال السابقون"),
    ("navigation.profile", "الملف الشخصي"),
    ("navigation.settings", "الإعدادات"),
    ("settings.language.select", "اختر اللغة"),
    ("settings.language.title", "اللغة"),
    ("settings.title", "الإعدادات"),
];

pub const PT: &[(&str, &str)] = &[
    ("auth.email", "E-mail"),
    ("auth.password", "Senha"),
    ("auth.role.employer", "Empregador"),
    ("auth.role.select", "Eu sou um..."),
    ("auth.role.worker", "Trabalhador"),
    ("auth.signIn", "Entrar"),
    ("auth.signOut", "Sair"),
    ("auth.signUp", "Cadastrar"),
    ("common.cancel", "Cancelar"),
    ("common.close", "Fechar"),
    ("common.delete", "Excluir"),
    ("common.edit", "Editar"),
    ("common.error", "Erro"),
    ("common.loading", "Carregando..."),
    ("common.save", "Salvar"),
    ("common.search", "Pesquisar"),
    ("common.submit", "Enviar"),
    ("common.success", "Sucesso"),
    ("navigation.appliedJobs", "Trabalhos aplicados"),
    ("navigation.findJobs", "Encontrar trabalhos"),
    ("navigation.myJobs", "Meus trabalhos"),
    ("navigation.notifications", "Notificações"),
    ("navigation.pastWorkers", "Trabalhadores anteriores"),
    ("navigation.profile", "Perfil"),
    ("navigation.settings", "Configurações"),
    ("settings.language.select", "Selecionar idioma"),
    ("settings.language.title", "Idioma"),
    ("settings.title", "Configurações"),
];
