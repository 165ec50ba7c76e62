//! Occupations collected during quoting.
//!
//! Besides the catalog itself this module maintains two reverse indices
//! built once on first use: normalized description to identifier and
//! normalized keyword token to identifier. Normalization keeps ASCII word
//! characters only, lowercased, with no separators; on collisions the later
//! entry wins.

use crate::macros::define_catalog;

use std::collections::HashMap;
use std::sync::LazyLock;

define_catalog! {
    /// Marker for the occupation catalog.
    marker: Occupation,
    id: OccupationId,
    validated: ValidatedOccupationId,
    registry: OCCUPATIONS,
    name: "Occupation",
    description: "Occupations collected during quoting.",
    entries: [
        (ACCOUNTANT, "accountant", "Accountant", "Accountant", 0, [("keywords", "CPA,bookkeeper,auditor")]),
        (ACTOR, "actor", "Actor", "Actor", 1, [("keywords", "actress,performer")]),
        (ACTUARY, "actuary", "Actuary", "Actuary", 2),
        (ACUPUNCTURIST, "acupuncturist", "Acupuncturist", "Acupuncturist", 3),
        (ADMINISTRATIVE_ASSISTANT, "administrative_assistant", "Administrative Assistant", "AdministrativeAssistant", 4, [("keywords", "admin,secretary,office assistant")]),
        (ADVERTISING_EXECUTIVE, "advertising_executive", "Advertising Executive", "AdvertisingExecutive", 5, [("keywords", "ad executive")]),
        (AEROSPACE_ENGINEER, "aerospace_engineer", "Aerospace Engineer", "AerospaceEngineer", 6),
        (AGRICULTURAL_INSPECTOR, "agricultural_inspector", "Agricultural Inspector", "AgriculturalInspector", 7),
        (AGRICULTURAL_SCIENTIST, "agricultural_scientist", "Agricultural Scientist", "AgriculturalScientist", 8, [("keywords", "agronomist")]),
        (AIR_TRAFFIC_CONTROLLER, "air_traffic_controller", "Air Traffic Controller", "AirTrafficController", 9, [("keywords", "ATC")]),
        (AIRCRAFT_MECHANIC, "aircraft_mechanic", "Aircraft Mechanic", "AircraftMechanic", 10, [("keywords", "aviation mechanic")]),
        (AIRLINE_PILOT, "airline_pilot", "Airline Pilot", "AirlinePilot", 11, [("keywords", "pilot,captain,first officer")]),
        (AMBULANCE_DRIVER, "ambulance_driver", "Ambulance Driver", "AmbulanceDriver", 12),
        (ANESTHESIOLOGIST, "anesthesiologist", "Anesthesiologist", "Anesthesiologist", 13),
        (ANIMAL_TRAINER, "animal_trainer", "Animal Trainer", "AnimalTrainer", 14),
        (ANTIQUE_DEALER, "antique_dealer", "Antique Dealer", "AntiqueDealer", 15),
        (APPRAISER, "appraiser", "Appraiser", "Appraiser", 16, [("keywords", "assessor")]),
        (ARBORIST, "arborist", "Arborist", "Arborist", 17, [("keywords", "tree surgeon")]),
        (ARCHAEOLOGIST, "archaeologist", "Archaeologist", "Archaeologist", 18),
        (ARCHITECT, "architect", "Architect", "Architect", 19),
        (ARCHIVIST, "archivist", "Archivist", "Archivist", 20),
        (ART_DEALER, "art_dealer", "Art Dealer", "ArtDealer", 21),
        (ART_DIRECTOR, "art_director", "Art Director", "ArtDirector", 22),
        (ARTIST, "artist", "Artist", "Artist", 23, [("keywords", "painter,sculptor")]),
        (ASBESTOS_WORKER, "asbestos_worker", "Asbestos Worker", "AsbestosWorker", 24),
        (ASSEMBLY_LINE_WORKER, "assembly_line_worker", "Assembly Line Worker", "AssemblyLineWorker", 25, [("keywords", "assembler")]),
        (ASTRONOMER, "astronomer", "Astronomer", "Astronomer", 26),
        (ATHLETE, "athlete", "Athlete", "Athlete", 27, [("keywords", "professional athlete,sports player")]),
        (ATHLETIC_TRAINER, "athletic_trainer", "Athletic Trainer", "AthleticTrainer", 28),
        (ATTORNEY, "attorney", "Attorney", "Attorney", 29, [("keywords", "lawyer,counsel,solicitor")]),
        (AUCTIONEER, "auctioneer", "Auctioneer", "Auctioneer", 30),
        (AUDIOLOGIST, "audiologist", "Audiologist", "Audiologist", 31),
        (AUTO_BODY_REPAIRER, "auto_body_repairer", "Auto Body Repairer", "AutoBodyRepairer", 32, [("keywords", "body shop")]),
        (AUTO_DAMAGE_APPRAISER, "auto_damage_appraiser", "Auto Damage Appraiser", "AutoDamageAppraiser", 33),
        (AUTO_MECHANIC, "auto_mechanic", "Auto Mechanic", "AutoMechanic", 34, [("keywords", "mechanic,automotive technician")]),
        (AUTO_PARTS_CLERK, "auto_parts_clerk", "Auto Parts Clerk", "AutoPartsClerk", 35),
        (AUTO_SALESPERSON, "auto_salesperson", "Auto Salesperson", "AutoSalesperson", 36, [("keywords", "car salesman,car dealer")]),
        (BAIL_BONDSMAN, "bail_bondsman", "Bail Bondsman", "BailBondsman", 37),
        (BAILIFF, "bailiff", "Bailiff", "Bailiff", 38),
        (BAKER, "baker", "Baker", "Baker", 39),
        (BANK_TELLER, "bank_teller", "Bank Teller", "BankTeller", 40, [("keywords", "teller")]),
        (BANKER, "banker", "Banker", "Banker", 41),
        (BARBER, "barber", "Barber", "Barber", 42),
        (BARTENDER, "bartender", "Bartender", "Bartender", 43, [("keywords", "barkeeper,mixologist")]),
        (BEAUTICIAN, "beautician", "Beautician", "Beautician", 44, [("keywords", "cosmetologist")]),
        (BELLHOP, "bellhop", "Bellhop", "Bellhop", 45, [("keywords", "bellman,porter")]),
        (BIOLOGIST, "biologist", "Biologist", "Biologist", 46),
        (BLACKSMITH, "blacksmith", "Blacksmith", "Blacksmith", 47),
        (BOAT_CAPTAIN, "boat_captain", "Boat Captain", "BoatCaptain", 48, [("keywords", "skipper")]),
        (BOILERMAKER, "boilermaker", "Boilermaker", "Boilermaker", 49),
        (BOOKBINDER, "bookbinder", "Bookbinder", "Bookbinder", 50),
        (BORDER_PATROL_AGENT, "border_patrol_agent", "Border Patrol Agent", "BorderPatrolAgent", 51),
        (BOTANIST, "botanist", "Botanist", "Botanist", 52),
        (BOUNTY_HUNTER, "bounty_hunter", "Bounty Hunter", "BountyHunter", 53),
        (BREWER, "brewer", "Brewer", "Brewer", 54),
        (BRICKLAYER, "bricklayer", "Bricklayer", "Bricklayer", 55, [("keywords", "mason")]),
        (BROADCAST_TECHNICIAN, "broadcast_technician", "Broadcast Technician", "BroadcastTechnician", 56),
        (BUS_DRIVER, "bus_driver", "Bus Driver", "BusDriver", 57),
        (BUSINESS_ANALYST, "business_analyst", "Business Analyst", "BusinessAnalyst", 58, [("keywords", "BA")]),
        (BUSINESS_OWNER, "business_owner", "Business Owner", "BusinessOwner", 59, [("keywords", "entrepreneur,proprietor,small business owner")]),
        (BUTCHER, "butcher", "Butcher", "Butcher", 60, [("keywords", "meat cutter")]),
        (BUYER, "buyer", "Buyer", "Buyer", 61, [("keywords", "purchasing agent,procurement")]),
        (CABINET_MAKER, "cabinet_maker", "Cabinet Maker", "CabinetMaker", 62),
        (CABLE_INSTALLER, "cable_installer", "Cable Installer", "CableInstaller", 63),
        (CAFETERIA_WORKER, "cafeteria_worker", "Cafeteria Worker", "CafeteriaWorker", 64),
        (CAMERA_OPERATOR, "camera_operator", "Camera Operator", "CameraOperator", 65),
        (CAR_WASH_ATTENDANT, "car_wash_attendant", "Car Wash Attendant", "CarWashAttendant", 66),
        (CARDIOLOGIST, "cardiologist", "Cardiologist", "Cardiologist", 67),
        (CARPENTER, "carpenter", "Carpenter", "Carpenter", 68),
        (CARPET_INSTALLER, "carpet_installer", "Carpet Installer", "CarpetInstaller", 69),
        (CARTOGRAPHER, "cartographer", "Cartographer", "Cartographer", 70, [("keywords", "mapmaker")]),
        (CASHIER, "cashier", "Cashier", "Cashier", 71, [("keywords", "checkout clerk")]),
        (CATERER, "caterer", "Caterer", "Caterer", 72),
        (CEMENT_MASON, "cement_mason", "Cement Mason", "CementMason", 73),
        (CHAPLAIN, "chaplain", "Chaplain", "Chaplain", 74),
        (CHAUFFEUR, "chauffeur", "Chauffeur", "Chauffeur", 75, [("keywords", "limo driver")]),
        (CHEF, "chef", "Chef", "Chef", 76, [("keywords", "cook,culinary")]),
        (CHEMICAL_ENGINEER, "chemical_engineer", "Chemical Engineer", "ChemicalEngineer", 77),
        (CHEMIST, "chemist", "Chemist", "Chemist", 78),
        (CHILD_CARE_WORKER, "child_care_worker", "Child Care Worker", "ChildCareWorker", 79, [("keywords", "daycare,nanny,babysitter")]),
        (CHIROPRACTOR, "chiropractor", "Chiropractor", "Chiropractor", 80),
        (CHOREOGRAPHER, "choreographer", "Choreographer", "Choreographer", 81),
        (CITY_PLANNER, "city_planner", "City Planner", "CityPlanner", 82, [("keywords", "urban planner")]),
        (CIVIL_ENGINEER, "civil_engineer", "Civil Engineer", "CivilEngineer", 83),
        (CLAIMS_ADJUSTER, "claims_adjuster", "Claims Adjuster", "ClaimsAdjuster", 84, [("keywords", "adjuster")]),
        (CLERGY, "clergy", "Clergy", "Clergy", 85, [("keywords", "minister,pastor,priest,rabbi,imam")]),
        (CLINICAL_PSYCHOLOGIST, "clinical_psychologist", "Clinical Psychologist", "ClinicalPsychologist", 86),
        (COACH, "coach", "Coach", "Coach", 87, [("keywords", "sports coach")]),
        (COAST_GUARD, "coast_guard", "Coast Guard", "CoastGuard", 88),
        (COLLEGE_PROFESSOR, "college_professor", "College Professor", "CollegeProfessor", 89, [("keywords", "professor,lecturer")]),
        (COLLEGE_STUDENT, "college_student", "College Student", "CollegeStudent", 90, [("keywords", "university student,undergraduate")]),
        (COMMERCIAL_DIVER, "commercial_diver", "Commercial Diver", "CommercialDiver", 91),
        (COMMERCIAL_FISHERMAN, "commercial_fisherman", "Commercial Fisherman", "CommercialFisherman", 92, [("keywords", "fisherman")]),
        (COMPUTER_OPERATOR, "computer_operator", "Computer Operator", "ComputerOperator", 93),
        (COMPUTER_PROGRAMMER, "computer_programmer", "Computer Programmer", "ComputerProgrammer", 94, [("keywords", "programmer,coder,software developer")]),
        (CONCIERGE, "concierge", "Concierge", "Concierge", 95),
        (CONCRETE_FINISHER, "concrete_finisher", "Concrete Finisher", "ConcreteFinisher", 96),
        (CONDUCTOR, "conductor", "Conductor", "Conductor", 97, [("keywords", "train conductor")]),
        (CONSERVATION_OFFICER, "conservation_officer", "Conservation Officer", "ConservationOfficer", 98, [("keywords", "game warden")]),
        (CONSTRUCTION_LABORER, "construction_laborer", "Construction Laborer", "ConstructionLaborer", 99, [("keywords", "construction worker")]),
        (CONSTRUCTION_MANAGER, "construction_manager", "Construction Manager", "ConstructionManager", 100, [("keywords", "general contractor")]),
        (CONSULTANT, "consultant", "Consultant", "Consultant", 101, [("keywords", "advisor")]),
        (CONTROLLER, "controller", "Controller", "Controller", 102, [("keywords", "comptroller")]),
        (COPYWRITER, "copywriter", "Copywriter", "Copywriter", 103),
        (CORONER, "coroner", "Coroner", "Coroner", 104, [("keywords", "medical examiner")]),
        (CORRECTIONAL_OFFICER, "correctional_officer", "Correctional Officer", "CorrectionalOfficer", 105, [("keywords", "prison guard,corrections")]),
        (COSMETIC_SURGEON, "cosmetic_surgeon", "Cosmetic Surgeon", "CosmeticSurgeon", 106),
        (COST_ESTIMATOR, "cost_estimator", "Cost Estimator", "CostEstimator", 107, [("keywords", "estimator")]),
        (COUNSELOR, "counselor", "Counselor", "Counselor", 108, [("keywords", "therapist")]),
        (COURIER, "courier", "Courier", "Courier", 109, [("keywords", "messenger,delivery person")]),
        (COURT_CLERK, "court_clerk", "Court Clerk", "CourtClerk", 110),
        (COURT_REPORTER, "court_reporter", "Court Reporter", "CourtReporter", 111, [("keywords", "stenographer")]),
        (CRANE_OPERATOR, "crane_operator", "Crane Operator", "CraneOperator", 112),
        (CREDIT_ANALYST, "credit_analyst", "Credit Analyst", "CreditAnalyst", 113),
        (CROSSING_GUARD, "crossing_guard", "Crossing Guard", "CrossingGuard", 114),
        (CURATOR, "curator", "Curator", "Curator", 115),
        (CUSTODIAN, "custodian", "Custodian", "Custodian", 116, [("keywords", "janitor,caretaker")]),
        (CUSTOMER_SERVICE_REPRESENTATIVE, "customer_service_representative", "Customer Service Representative", "CustomerServiceRepresentative", 117, [("keywords", "CSR,call center")]),
        (CUSTOMS_OFFICER, "customs_officer", "Customs Officer", "CustomsOfficer", 118),
        (DAIRY_FARMER, "dairy_farmer", "Dairy Farmer", "DairyFarmer", 119),
        (DANCER, "dancer", "Dancer", "Dancer", 120),
        (DATA_ENTRY_CLERK, "data_entry_clerk", "Data Entry Clerk", "DataEntryClerk", 121),
        (DATA_SCIENTIST, "data_scientist", "Data Scientist", "DataScientist", 122),
        (DATABASE_ADMINISTRATOR, "database_administrator", "Database Administrator", "DatabaseAdministrator", 123, [("keywords", "DBA")]),
        (DAY_TRADER, "day_trader", "Day Trader", "DayTrader", 124),
        (DENTAL_ASSISTANT, "dental_assistant", "Dental Assistant", "DentalAssistant", 125),
        (DENTAL_HYGIENIST, "dental_hygienist", "Dental Hygienist", "DentalHygienist", 126, [("keywords", "hygienist")]),
        (DENTIST, "dentist", "Dentist", "Dentist", 127),
        (DERMATOLOGIST, "dermatologist", "Dermatologist", "Dermatologist", 128),
        (DETECTIVE, "detective", "Detective", "Detective", 129, [("keywords", "investigator")]),
        (DIETITIAN, "dietitian", "Dietitian", "Dietitian", 130, [("keywords", "nutritionist")]),
        (DISPATCHER, "dispatcher", "Dispatcher", "Dispatcher", 131),
        (DOCK_WORKER, "dock_worker", "Dock Worker", "DockWorker", 132, [("keywords", "longshoreman,stevedore")]),
        (DOCTOR, "doctor", "Doctor", "Doctor", 133, [("keywords", "physician,MD")]),
        (DOG_GROOMER, "dog_groomer", "Dog Groomer", "DogGroomer", 134),
        (DOG_TRAINER, "dog_trainer", "Dog Trainer", "DogTrainer", 135),
        (DOORMAN, "doorman", "Doorman", "Doorman", 136),
        (DRAFTER, "drafter", "Drafter", "Drafter", 137, [("keywords", "draftsman,CAD")]),
        (DRESSMAKER, "dressmaker", "Dressmaker", "Dressmaker", 138, [("keywords", "seamstress")]),
        (DRIVING_INSTRUCTOR, "driving_instructor", "Driving Instructor", "DrivingInstructor", 139),
        (DRY_CLEANER, "dry_cleaner", "Dry Cleaner", "DryCleaner", 140),
        (DRYWALL_INSTALLER, "drywall_installer", "Drywall Installer", "DrywallInstaller", 141),
        (ECONOMIST, "economist", "Economist", "Economist", 142),
        (EDITOR, "editor", "Editor", "Editor", 143),
        (ELECTRICAL_ENGINEER, "electrical_engineer", "Electrical Engineer", "ElectricalEngineer", 144),
        (ELECTRICIAN, "electrician", "Electrician", "Electrician", 145),
        (ELEMENTARY_SCHOOL_TEACHER, "elementary_school_teacher", "Elementary School Teacher", "ElementarySchoolTeacher", 146, [("keywords", "grade school teacher")]),
        (ELEVATOR_MECHANIC, "elevator_mechanic", "Elevator Mechanic", "ElevatorMechanic", 147),
        (EMBALMER, "embalmer", "Embalmer", "Embalmer", 148),
        (EMERGENCY_MEDICAL_TECHNICIAN, "emergency_medical_technician", "Emergency Medical Technician", "EmergencyMedicalTechnician", 149, [("keywords", "EMT,paramedic")]),
        (ENGINEER, "engineer", "Engineer", "Engineer", 150),
        (ENVIRONMENTAL_SCIENTIST, "environmental_scientist", "Environmental Scientist", "EnvironmentalScientist", 151),
        (EPIDEMIOLOGIST, "epidemiologist", "Epidemiologist", "Epidemiologist", 152),
        (EQUIPMENT_OPERATOR, "equipment_operator", "Equipment Operator", "EquipmentOperator", 153, [("keywords", "heavy equipment operator")]),
        (ESCROW_OFFICER, "escrow_officer", "Escrow Officer", "EscrowOfficer", 154),
        (ESTHETICIAN, "esthetician", "Esthetician", "Esthetician", 155),
        (EVENT_PLANNER, "event_planner", "Event Planner", "EventPlanner", 156, [("keywords", "wedding planner")]),
        (EXECUTIVE_ASSISTANT, "executive_assistant", "Executive Assistant", "ExecutiveAssistant", 157),
        (EXTERMINATOR, "exterminator", "Exterminator", "Exterminator", 158, [("keywords", "pest control")]),
        (FACTORY_WORKER, "factory_worker", "Factory Worker", "FactoryWorker", 159, [("keywords", "production worker")]),
        (FARM_WORKER, "farm_worker", "Farm Worker", "FarmWorker", 160, [("keywords", "farm hand")]),
        (FARMER, "farmer", "Farmer", "Farmer", 161, [("keywords", "rancher")]),
        (FASHION_DESIGNER, "fashion_designer", "Fashion Designer", "FashionDesigner", 162),
        (FAST_FOOD_WORKER, "fast_food_worker", "Fast Food Worker", "FastFoodWorker", 163),
        (FILM_DIRECTOR, "film_director", "Film Director", "FilmDirector", 164),
        (FINANCIAL_ADVISOR, "financial_advisor", "Financial Advisor", "FinancialAdvisor", 165, [("keywords", "financial planner,wealth manager")]),
        (FINANCIAL_ANALYST, "financial_analyst", "Financial Analyst", "FinancialAnalyst", 166),
        (FIRE_CHIEF, "fire_chief", "Fire Chief", "FireChief", 167),
        (FIRE_INSPECTOR, "fire_inspector", "Fire Inspector", "FireInspector", 168),
        (FIREFIGHTER, "firefighter", "Firefighter", "Firefighter", 169, [("keywords", "fireman")]),
        (FITNESS_INSTRUCTOR, "fitness_instructor", "Fitness Instructor", "FitnessInstructor", 170, [("keywords", "personal trainer,gym instructor")]),
        (FLIGHT_ATTENDANT, "flight_attendant", "Flight Attendant", "FlightAttendant", 171, [("keywords", "steward,stewardess,cabin crew")]),
        (FLIGHT_INSTRUCTOR, "flight_instructor", "Flight Instructor", "FlightInstructor", 172),
        (FLOOR_INSTALLER, "floor_installer", "Floor Installer", "FloorInstaller", 173),
        (FLORIST, "florist", "Florist", "Florist", 174),
        (FOOD_INSPECTOR, "food_inspector", "Food Inspector", "FoodInspector", 175),
        (FOOD_SCIENTIST, "food_scientist", "Food Scientist", "FoodScientist", 176),
        (FORESTER, "forester", "Forester", "Forester", 177),
        (FORKLIFT_OPERATOR, "forklift_operator", "Forklift Operator", "ForkliftOperator", 178),
        (FOSTER_PARENT, "foster_parent", "Foster Parent", "FosterParent", 179),
        (FREIGHT_HANDLER, "freight_handler", "Freight Handler", "FreightHandler", 180),
        (FUNERAL_DIRECTOR, "funeral_director", "Funeral Director", "FuneralDirector", 181, [("keywords", "mortician,undertaker")]),
        (FURNITURE_MAKER, "furniture_maker", "Furniture Maker", "FurnitureMaker", 182),
        (GAME_DESIGNER, "game_designer", "Game Designer", "GameDesigner", 183),
        (GARBAGE_COLLECTOR, "garbage_collector", "Garbage Collector", "GarbageCollector", 184, [("keywords", "sanitation worker,refuse collector")]),
        (GARDENER, "gardener", "Gardener", "Gardener", 185),
        (GAS_STATION_ATTENDANT, "gas_station_attendant", "Gas Station Attendant", "GasStationAttendant", 186),
        (GENETIC_COUNSELOR, "genetic_counselor", "Genetic Counselor", "GeneticCounselor", 187),
        (GEOLOGIST, "geologist", "Geologist", "Geologist", 188),
        (GLAZIER, "glazier", "Glazier", "Glazier", 189),
        (GOVERNMENT_EMPLOYEE, "government_employee", "Government Employee", "GovernmentEmployee", 190, [("keywords", "civil servant,federal employee")]),
        (GRADUATE_STUDENT, "graduate_student", "Graduate Student", "GraduateStudent", 191, [("keywords", "PhD student")]),
        (GRAPHIC_DESIGNER, "graphic_designer", "Graphic Designer", "GraphicDesigner", 192),
        (GROUNDSKEEPER, "groundskeeper", "Groundskeeper", "Groundskeeper", 193),
        (GUIDANCE_COUNSELOR, "guidance_counselor", "Guidance Counselor", "GuidanceCounselor", 194, [("keywords", "school counselor")]),
        (GUNSMITH, "gunsmith", "Gunsmith", "Gunsmith", 195),
        (HAIR_STYLIST, "hair_stylist", "Hair Stylist", "HairStylist", 196, [("keywords", "hairdresser")]),
        (HANDYMAN, "handyman", "Handyman", "Handyman", 197),
        (HARBOR_PILOT, "harbor_pilot", "Harbor Pilot", "HarborPilot", 198),
        (HEALTH_INSPECTOR, "health_inspector", "Health Inspector", "HealthInspector", 199),
        (HEARING_AID_SPECIALIST, "hearing_aid_specialist", "Hearing Aid Specialist", "HearingAidSpecialist", 200),
        (HEAT_AND_AIR_TECHNICIAN, "heat_and_air_technician", "Heat and Air Technician", "HeatAndAirTechnician", 201, [("keywords", "HVAC")]),
        (HOME_HEALTH_AIDE, "home_health_aide", "Home Health Aide", "HomeHealthAide", 202),
        (HOMEMAKER, "homemaker", "Homemaker", "Homemaker", 203, [("keywords", "housewife,stay at home parent,househusband")]),
        (HORSE_TRAINER, "horse_trainer", "Horse Trainer", "HorseTrainer", 204),
        (HOSPICE_WORKER, "hospice_worker", "Hospice Worker", "HospiceWorker", 205),
        (HOSPITAL_ADMINISTRATOR, "hospital_administrator", "Hospital Administrator", "HospitalAdministrator", 206),
        (HOTEL_MANAGER, "hotel_manager", "Hotel Manager", "HotelManager", 207),
        (HOUSEKEEPER, "housekeeper", "Housekeeper", "Housekeeper", 208, [("keywords", "maid,cleaner")]),
        (HUMAN_RESOURCES_MANAGER, "human_resources_manager", "Human Resources Manager", "HumanResourcesManager", 209, [("keywords", "HR")]),
        (HYDROLOGIST, "hydrologist", "Hydrologist", "Hydrologist", 210),
        (ILLUSTRATOR, "illustrator", "Illustrator", "Illustrator", 211),
        (IMMIGRATION_OFFICER, "immigration_officer", "Immigration Officer", "ImmigrationOfficer", 212),
        (INDUSTRIAL_DESIGNER, "industrial_designer", "Industrial Designer", "IndustrialDesigner", 213),
        (INDUSTRIAL_ENGINEER, "industrial_engineer", "Industrial Engineer", "IndustrialEngineer", 214),
        (INFORMATION_TECHNOLOGY_MANAGER, "information_technology_manager", "Information Technology Manager", "InformationTechnologyManager", 215, [("keywords", "IT manager")]),
        (INSTRUCTIONAL_DESIGNER, "instructional_designer", "Instructional Designer", "InstructionalDesigner", 216),
        (INSULATION_WORKER, "insulation_worker", "Insulation Worker", "InsulationWorker", 217),
        (INSURANCE_AGENT, "insurance_agent", "Insurance Agent", "InsuranceAgent", 218, [("keywords", "insurance broker,insurance producer")]),
        (INSURANCE_UNDERWRITER, "insurance_underwriter", "Insurance Underwriter", "InsuranceUnderwriter", 219, [("keywords", "underwriter")]),
        (INTERIOR_DESIGNER, "interior_designer", "Interior Designer", "InteriorDesigner", 220, [("keywords", "decorator")]),
        (INTERPRETER, "interpreter", "Interpreter", "Interpreter", 221, [("keywords", "translator")]),
        (INVENTORY_CLERK, "inventory_clerk", "Inventory Clerk", "InventoryClerk", 222, [("keywords", "stock clerk")]),
        (IRONWORKER, "ironworker", "Ironworker", "Ironworker", 223),
        (JAILER, "jailer", "Jailer", "Jailer", 224),
        (JEWELER, "jeweler", "Jeweler", "Jeweler", 225),
        (JOURNALIST, "journalist", "Journalist", "Journalist", 226, [("keywords", "reporter,correspondent")]),
        (JUDGE, "judge", "Judge", "Judge", 227, [("keywords", "magistrate")]),
        (KENNEL_WORKER, "kennel_worker", "Kennel Worker", "KennelWorker", 228),
        (KINDERGARTEN_TEACHER, "kindergarten_teacher", "Kindergarten Teacher", "KindergartenTeacher", 229, [("keywords", "preschool teacher")]),
        (LABORATORY_TECHNICIAN, "laboratory_technician", "Laboratory Technician", "LaboratoryTechnician", 230, [("keywords", "lab tech")]),
        (LANDSCAPER, "landscaper", "Landscaper", "Landscaper", 231, [("keywords", "landscape architect")]),
        (LAUNDRY_WORKER, "laundry_worker", "Laundry Worker", "LaundryWorker", 232),
        (LAW_CLERK, "law_clerk", "Law Clerk", "LawClerk", 233),
        (LIBRARIAN, "librarian", "Librarian", "Librarian", 234),
        (LIFEGUARD, "lifeguard", "Lifeguard", "Lifeguard", 235),
        (LINEMAN, "lineman", "Lineman", "Lineman", 236, [("keywords", "line worker,power lineman")]),
        (LOAN_OFFICER, "loan_officer", "Loan Officer", "LoanOfficer", 237, [("keywords", "mortgage broker")]),
        (LOBBYIST, "lobbyist", "Lobbyist", "Lobbyist", 238),
        (LOCKSMITH, "locksmith", "Locksmith", "Locksmith", 239),
        (LOCOMOTIVE_ENGINEER, "locomotive_engineer", "Locomotive Engineer", "LocomotiveEngineer", 240, [("keywords", "train engineer")]),
        (MACHINIST, "machinist", "Machinist", "Machinist", 241),
        (MAIL_CARRIER, "mail_carrier", "Mail Carrier", "MailCarrier", 242, [("keywords", "postal worker,letter carrier,mailman")]),
        (MAINTENANCE_WORKER, "maintenance_worker", "Maintenance Worker", "MaintenanceWorker", 243),
        (MAKEUP_ARTIST, "makeup_artist", "Makeup Artist", "MakeupArtist", 244),
        (MANAGER, "manager", "Manager", "Manager", 245, [("keywords", "supervisor")]),
        (MANICURIST, "manicurist", "Manicurist", "Manicurist", 246, [("keywords", "nail technician")]),
        (MANUFACTURING_ENGINEER, "manufacturing_engineer", "Manufacturing Engineer", "ManufacturingEngineer", 247),
        (MARINE_BIOLOGIST, "marine_biologist", "Marine Biologist", "MarineBiologist", 248),
        (MARKETING_MANAGER, "marketing_manager", "Marketing Manager", "MarketingManager", 249),
        (MARRIAGE_COUNSELOR, "marriage_counselor", "Marriage Counselor", "MarriageCounselor", 250, [("keywords", "family therapist")]),
        (MASSAGE_THERAPIST, "massage_therapist", "Massage Therapist", "MassageTherapist", 251, [("keywords", "masseuse,masseur")]),
        (MATHEMATICIAN, "mathematician", "Mathematician", "Mathematician", 252),
        (MECHANICAL_ENGINEER, "mechanical_engineer", "Mechanical Engineer", "MechanicalEngineer", 253),
        (MEDICAL_ASSISTANT, "medical_assistant", "Medical Assistant", "MedicalAssistant", 254),
        (MEDICAL_BILLER, "medical_biller", "Medical Biller", "MedicalBiller", 255, [("keywords", "medical coder")]),
        (MEDICAL_TRANSCRIPTIONIST, "medical_transcriptionist", "Medical Transcriptionist", "MedicalTranscriptionist", 256),
        (METALLURGIST, "metallurgist", "Metallurgist", "Metallurgist", 257),
        (METEOROLOGIST, "meteorologist", "Meteorologist", "Meteorologist", 258, [("keywords", "weather forecaster")]),
        (METER_READER, "meter_reader", "Meter Reader", "MeterReader", 259),
        (MICROBIOLOGIST, "microbiologist", "Microbiologist", "Microbiologist", 260),
        (MIDWIFE, "midwife", "Midwife", "Midwife", 261),
        (MILITARY_ENLISTED, "military_enlisted", "Military Enlisted", "MilitaryEnlisted", 262, [("keywords", "soldier,sailor,airman,marine")]),
        (MILITARY_OFFICER, "military_officer", "Military Officer", "MilitaryOfficer", 263),
        (MILLWRIGHT, "millwright", "Millwright", "Millwright", 264),
        (MINER, "miner", "Miner", "Miner", 265),
        (MODEL, "model", "Model", "Model", 266),
        (MOTEL_CLERK, "motel_clerk", "Motel Clerk", "MotelClerk", 267, [("keywords", "front desk clerk")]),
        (MUSEUM_WORKER, "museum_worker", "Museum Worker", "MuseumWorker", 268),
        (MUSIC_TEACHER, "music_teacher", "Music Teacher", "MusicTeacher", 269),
        (MUSICIAN, "musician", "Musician", "Musician", 270),
        (NETWORK_ADMINISTRATOR, "network_administrator", "Network Administrator", "NetworkAdministrator", 271, [("keywords", "network engineer,sysadmin")]),
        (NEWS_ANCHOR, "news_anchor", "News Anchor", "NewsAnchor", 272),
        (NOTARY, "notary", "Notary", "Notary", 273, [("keywords", "notary public")]),
        (NUCLEAR_ENGINEER, "nuclear_engineer", "Nuclear Engineer", "NuclearEngineer", 274),
        (NURSE, "nurse", "Nurse", "Nurse", 275, [("keywords", "registered nurse,RN,LPN")]),
        (NURSE_PRACTITIONER, "nurse_practitioner", "Nurse Practitioner", "NursePractitioner", 276),
        (NURSING_AIDE, "nursing_aide", "Nursing Aide", "NursingAide", 277, [("keywords", "CNA,orderly")]),
        (OBSTETRICIAN, "obstetrician", "Obstetrician", "Obstetrician", 278, [("keywords", "OBGYN")]),
        (OCCUPATIONAL_THERAPIST, "occupational_therapist", "Occupational Therapist", "OccupationalTherapist", 279),
        (OCEANOGRAPHER, "oceanographer", "Oceanographer", "Oceanographer", 280),
        (OFFICE_MANAGER, "office_manager", "Office Manager", "OfficeManager", 281),
        (OIL_RIG_WORKER, "oil_rig_worker", "Oil Rig Worker", "OilRigWorker", 282, [("keywords", "roughneck")]),
        (ONCOLOGIST, "oncologist", "Oncologist", "Oncologist", 283),
        (OPERATIONS_MANAGER, "operations_manager", "Operations Manager", "OperationsManager", 284),
        (OPHTHALMOLOGIST, "ophthalmologist", "Ophthalmologist", "Ophthalmologist", 285),
        (OPTICIAN, "optician", "Optician", "Optician", 286),
        (OPTOMETRIST, "optometrist", "Optometrist", "Optometrist", 287),
        (ORTHODONTIST, "orthodontist", "Orthodontist", "Orthodontist", 288),
        (ORTHOPEDIC_SURGEON, "orthopedic_surgeon", "Orthopedic Surgeon", "OrthopedicSurgeon", 289),
        (PAINTER, "painter", "Painter", "Painter", 290, [("keywords", "house painter")]),
        (PARALEGAL, "paralegal", "Paralegal", "Paralegal", 291, [("keywords", "legal assistant")]),
        (PARK_RANGER, "park_ranger", "Park Ranger", "ParkRanger", 292),
        (PARKING_ATTENDANT, "parking_attendant", "Parking Attendant", "ParkingAttendant", 293, [("keywords", "valet")]),
        (PAROLE_OFFICER, "parole_officer", "Parole Officer", "ParoleOfficer", 294, [("keywords", "probation officer")]),
        (PATHOLOGIST, "pathologist", "Pathologist", "Pathologist", 295),
        (PAWNBROKER, "pawnbroker", "Pawnbroker", "Pawnbroker", 296),
        (PAYROLL_CLERK, "payroll_clerk", "Payroll Clerk", "PayrollClerk", 297),
        (PEDIATRICIAN, "pediatrician", "Pediatrician", "Pediatrician", 298),
        (PERSONAL_ASSISTANT, "personal_assistant", "Personal Assistant", "PersonalAssistant", 299),
        (PET_SITTER, "pet_sitter", "Pet Sitter", "PetSitter", 300),
        (PETROLEUM_ENGINEER, "petroleum_engineer", "Petroleum Engineer", "PetroleumEngineer", 301),
        (PHARMACIST, "pharmacist", "Pharmacist", "Pharmacist", 302),
        (PHARMACY_TECHNICIAN, "pharmacy_technician", "Pharmacy Technician", "PharmacyTechnician", 303),
        (PHLEBOTOMIST, "phlebotomist", "Phlebotomist", "Phlebotomist", 304),
        (PHOTOGRAPHER, "photographer", "Photographer", "Photographer", 305),
        (PHYSICAL_THERAPIST, "physical_therapist", "Physical Therapist", "PhysicalTherapist", 306, [("keywords", "physiotherapist")]),
        (PHYSICIAN_ASSISTANT, "physician_assistant", "Physician Assistant", "PhysicianAssistant", 307, [("keywords", "PA")]),
        (PHYSICIST, "physicist", "Physicist", "Physicist", 308),
        (PIANO_TUNER, "piano_tuner", "Piano Tuner", "PianoTuner", 309),
        (PIPEFITTER, "pipefitter", "Pipefitter", "Pipefitter", 310),
        (PLASTERER, "plasterer", "Plasterer", "Plasterer", 311),
        (PLUMBER, "plumber", "Plumber", "Plumber", 312),
        (PODIATRIST, "podiatrist", "Podiatrist", "Podiatrist", 313),
        (POLICE_CHIEF, "police_chief", "Police Chief", "PoliceChief", 314),
        (POLICE_OFFICER, "police_officer", "Police Officer", "PoliceOfficer", 315, [("keywords", "cop,patrolman,state trooper")]),
        (POLITICAL_SCIENTIST, "political_scientist", "Political Scientist", "PoliticalScientist", 316),
        (POLITICIAN, "politician", "Politician", "Politician", 317, [("keywords", "elected official")]),
        (POSTMASTER, "postmaster", "Postmaster", "Postmaster", 318),
        (PRINTER, "printer", "Printer", "Printer", 319, [("keywords", "print operator")]),
        (PRIVATE_INVESTIGATOR, "private_investigator", "Private Investigator", "PrivateInvestigator", 320, [("keywords", "PI")]),
        (PRODUCER, "producer", "Producer", "Producer", 321),
        (PRODUCT_MANAGER, "product_manager", "Product Manager", "ProductManager", 322),
        (PROJECT_MANAGER, "project_manager", "Project Manager", "ProjectManager", 323, [("keywords", "PM")]),
        (PROOFREADER, "proofreader", "Proofreader", "Proofreader", 324),
        (PROPERTY_MANAGER, "property_manager", "Property Manager", "PropertyManager", 325),
        (PROSTHETIST, "prosthetist", "Prosthetist", "Prosthetist", 326),
        (PSYCHIATRIST, "psychiatrist", "Psychiatrist", "Psychiatrist", 327),
        (PUBLIC_RELATIONS_SPECIALIST, "public_relations_specialist", "Public Relations Specialist", "PublicRelationsSpecialist", 328, [("keywords", "PR")]),
        (PUBLISHER, "publisher", "Publisher", "Publisher", 329),
        (PURCHASING_MANAGER, "purchasing_manager", "Purchasing Manager", "PurchasingManager", 330),
        (QUALITY_CONTROL_INSPECTOR, "quality_control_inspector", "Quality Control Inspector", "QualityControlInspector", 331, [("keywords", "QA inspector")]),
        (RADIO_ANNOUNCER, "radio_announcer", "Radio Announcer", "RadioAnnouncer", 332, [("keywords", "DJ,disc jockey")]),
        (RADIOLOGIC_TECHNOLOGIST, "radiologic_technologist", "Radiologic Technologist", "RadiologicTechnologist", 333, [("keywords", "xray tech")]),
        (RADIOLOGIST, "radiologist", "Radiologist", "Radiologist", 334),
        (RAILROAD_WORKER, "railroad_worker", "Railroad Worker", "RailroadWorker", 335),
        (REAL_ESTATE_AGENT, "real_estate_agent", "Real Estate Agent", "RealEstateAgent", 336, [("keywords", "realtor,real estate broker")]),
        (RECEPTIONIST, "receptionist", "Receptionist", "Receptionist", 337),
        (RECRUITER, "recruiter", "Recruiter", "Recruiter", 338, [("keywords", "headhunter,talent acquisition")]),
        (REFEREE, "referee", "Referee", "Referee", 339, [("keywords", "umpire")]),
        (REFINERY_WORKER, "refinery_worker", "Refinery Worker", "RefineryWorker", 340),
        (REGISTRAR, "registrar", "Registrar", "Registrar", 341),
        (REHABILITATION_COUNSELOR, "rehabilitation_counselor", "Rehabilitation Counselor", "RehabilitationCounselor", 342),
        (RENTAL_AGENT, "rental_agent", "Rental Agent", "RentalAgent", 343),
        (RESEARCHER, "researcher", "Researcher", "Researcher", 344, [("keywords", "research scientist")]),
        (RESPIRATORY_THERAPIST, "respiratory_therapist", "Respiratory Therapist", "RespiratoryTherapist", 345),
        (RESTAURANT_MANAGER, "restaurant_manager", "Restaurant Manager", "RestaurantManager", 346),
        (RETAIL_MANAGER, "retail_manager", "Retail Manager", "RetailManager", 347, [("keywords", "store manager")]),
        (RETAIL_SALESPERSON, "retail_salesperson", "Retail Salesperson", "RetailSalesperson", 348, [("keywords", "sales associate,shop assistant")]),
        (RETIRED, "retired", "Retired", "Retired", 349, [("keywords", "retiree,pensioner")]),
        (ROOFER, "roofer", "Roofer", "Roofer", 350),
        (SAFETY_INSPECTOR, "safety_inspector", "Safety Inspector", "SafetyInspector", 351),
        (SALES_MANAGER, "sales_manager", "Sales Manager", "SalesManager", 352),
        (SALES_REPRESENTATIVE, "sales_representative", "Sales Representative", "SalesRepresentative", 353, [("keywords", "salesperson,account executive")]),
        (SCHOOL_ADMINISTRATOR, "school_administrator", "School Administrator", "SchoolAdministrator", 354, [("keywords", "principal,dean")]),
        (SCHOOL_BUS_DRIVER, "school_bus_driver", "School Bus Driver", "SchoolBusDriver", 355),
        (SCIENTIST, "scientist", "Scientist", "Scientist", 356),
        (SCREENWRITER, "screenwriter", "Screenwriter", "Screenwriter", 357),
        (SEAMAN, "seaman", "Seaman", "Seaman", 358, [("keywords", "merchant marine")]),
        (SECONDARY_SCHOOL_TEACHER, "secondary_school_teacher", "Secondary School Teacher", "SecondarySchoolTeacher", 359, [("keywords", "high school teacher")]),
        (SECURITY_GUARD, "security_guard", "Security Guard", "SecurityGuard", 360, [("keywords", "watchman,bouncer")]),
        (SELF_EMPLOYED, "self_employed", "Self Employed", "SelfEmployed", 361, [("keywords", "freelancer,independent contractor,gig worker")]),
        (SHEET_METAL_WORKER, "sheet_metal_worker", "Sheet Metal Worker", "SheetMetalWorker", 362),
        (SHERIFF, "sheriff", "Sheriff", "Sheriff", 363, [("keywords", "deputy sheriff")]),
        (SHIP_BUILDER, "ship_builder", "Ship Builder", "ShipBuilder", 364, [("keywords", "shipwright")]),
        (SHOE_REPAIRER, "shoe_repairer", "Shoe Repairer", "ShoeRepairer", 365, [("keywords", "cobbler")]),
        (SIGN_LANGUAGE_INTERPRETER, "sign_language_interpreter", "Sign Language Interpreter", "SignLanguageInterpreter", 366),
        (SINGER, "singer", "Singer", "Singer", 367, [("keywords", "vocalist")]),
        (SOCIAL_MEDIA_MANAGER, "social_media_manager", "Social Media Manager", "SocialMediaManager", 368),
        (SOCIAL_WORKER, "social_worker", "Social Worker", "SocialWorker", 369, [("keywords", "caseworker")]),
        (SOFTWARE_ENGINEER, "software_engineer", "Software Engineer", "SoftwareEngineer", 370, [("keywords", "software architect,web developer,app developer")]),
        (SOIL_SCIENTIST, "soil_scientist", "Soil Scientist", "SoilScientist", 371),
        (SOMMELIER, "sommelier", "Sommelier", "Sommelier", 372, [("keywords", "wine steward")]),
        (SONOGRAPHER, "sonographer", "Sonographer", "Sonographer", 373, [("keywords", "ultrasound technician")]),
        (SOUS_CHEF, "sous_chef", "Sous Chef", "SousChef", 374),
        (SPEECH_THERAPIST, "speech_therapist", "Speech Therapist", "SpeechTherapist", 375, [("keywords", "speech pathologist")]),
        (SPORTS_AGENT, "sports_agent", "Sports Agent", "SportsAgent", 376),
        (STATISTICIAN, "statistician", "Statistician", "Statistician", 377),
        (STEELWORKER, "steelworker", "Steelworker", "Steelworker", 378),
        (STOCKBROKER, "stockbroker", "Stockbroker", "Stockbroker", 379, [("keywords", "broker,securities trader")]),
        (STUDENT, "student", "Student", "Student", 380, [("keywords", "high school student")]),
        (STUNT_PERFORMER, "stunt_performer", "Stunt Performer", "StuntPerformer", 381, [("keywords", "stuntman")]),
        (SURGEON, "surgeon", "Surgeon", "Surgeon", 382),
        (SURVEYOR, "surveyor", "Surveyor", "Surveyor", 383, [("keywords", "land surveyor")]),
        (SYSTEMS_ANALYST, "systems_analyst", "Systems Analyst", "SystemsAnalyst", 384),
        (TAILOR, "tailor", "Tailor", "Tailor", 385),
        (TATTOO_ARTIST, "tattoo_artist", "Tattoo Artist", "TattooArtist", 386),
        (TAX_PREPARER, "tax_preparer", "Tax Preparer", "TaxPreparer", 387, [("keywords", "tax advisor")]),
        (TAXI_DRIVER, "taxi_driver", "Taxi Driver", "TaxiDriver", 388, [("keywords", "cab driver,rideshare driver,uber driver,lyft driver")]),
        (TAXIDERMIST, "taxidermist", "Taxidermist", "Taxidermist", 389),
        (TEACHER, "teacher", "Teacher", "Teacher", 390, [("keywords", "educator,schoolteacher")]),
        (TEACHER_AIDE, "teacher_aide", "Teacher Aide", "TeacherAide", 391, [("keywords", "paraprofessional")]),
        (TECHNICAL_WRITER, "technical_writer", "Technical Writer", "TechnicalWriter", 392),
        (TELEMARKETER, "telemarketer", "Telemarketer", "Telemarketer", 393),
        (TELEPHONE_OPERATOR, "telephone_operator", "Telephone Operator", "TelephoneOperator", 394),
        (TELEVISION_PRODUCER, "television_producer", "Television Producer", "TelevisionProducer", 395),
        (TILE_SETTER, "tile_setter", "Tile Setter", "TileSetter", 396),
        (TOOL_AND_DIE_MAKER, "tool_and_die_maker", "Tool and Die Maker", "ToolAndDieMaker", 397),
        (TOUR_GUIDE, "tour_guide", "Tour Guide", "TourGuide", 398),
        (TOW_TRUCK_DRIVER, "tow_truck_driver", "Tow Truck Driver", "TowTruckDriver", 399),
        (TRAFFIC_ENGINEER, "traffic_engineer", "Traffic Engineer", "TrafficEngineer", 400),
        (TRAVEL_AGENT, "travel_agent", "Travel Agent", "TravelAgent", 401),
        (TRUCK_DRIVER, "truck_driver", "Truck Driver", "TruckDriver", 402, [("keywords", "trucker,CDL driver,semi driver")]),
        (TUTOR, "tutor", "Tutor", "Tutor", 403),
        (UNEMPLOYED, "unemployed", "Unemployed", "Unemployed", 404, [("keywords", "not employed,between jobs")]),
        (UPHOLSTERER, "upholsterer", "Upholsterer", "Upholsterer", 405),
        (UROLOGIST, "urologist", "Urologist", "Urologist", 406),
        (USHER, "usher", "Usher", "Usher", 407),
        (UTILITY_WORKER, "utility_worker", "Utility Worker", "UtilityWorker", 408),
        (VETERINARIAN, "veterinarian", "Veterinarian", "Veterinarian", 409, [("keywords", "vet,animal doctor")]),
        (VETERINARY_TECHNICIAN, "veterinary_technician", "Veterinary Technician", "VeterinaryTechnician", 410, [("keywords", "vet tech")]),
        (VIDEO_EDITOR, "video_editor", "Video Editor", "VideoEditor", 411),
        (VOCATIONAL_COUNSELOR, "vocational_counselor", "Vocational Counselor", "VocationalCounselor", 412),
        (WAITER, "waiter", "Waiter", "Waiter", 413, [("keywords", "waitress,server")]),
        (WAREHOUSE_WORKER, "warehouse_worker", "Warehouse Worker", "WarehouseWorker", 414, [("keywords", "picker,packer")]),
        (WATCH_REPAIRER, "watch_repairer", "Watch Repairer", "WatchRepairer", 415, [("keywords", "horologist")]),
        (WATER_TREATMENT_OPERATOR, "water_treatment_operator", "Water Treatment Operator", "WaterTreatmentOperator", 416),
        (WEB_DESIGNER, "web_designer", "Web Designer", "WebDesigner", 417),
        (WELDER, "welder", "Welder", "Welder", 418),
        (WELL_DRILLER, "well_driller", "Well Driller", "WellDriller", 419),
        (WHOLESALE_BUYER, "wholesale_buyer", "Wholesale Buyer", "WholesaleBuyer", 420),
        (WILDLIFE_BIOLOGIST, "wildlife_biologist", "Wildlife Biologist", "WildlifeBiologist", 421),
        (WINDOW_WASHER, "window_washer", "Window Washer", "WindowWasher", 422),
        (WINEMAKER, "winemaker", "Winemaker", "Winemaker", 423, [("keywords", "vintner")]),
        (WOODWORKER, "woodworker", "Woodworker", "Woodworker", 424),
        (WRITER, "writer", "Writer", "Writer", 425, [("keywords", "author,novelist")]),
        (X_RAY_TECHNICIAN, "x_ray_technician", "X Ray Technician", "XRayTechnician", 426),
        (YOGA_INSTRUCTOR, "yoga_instructor", "Yoga Instructor", "YogaInstructor", 427),
        (ZOOKEEPER, "zookeeper", "Zookeeper", "Zookeeper", 428),
        (ZOOLOGIST, "zoologist", "Zoologist", "Zoologist", 429),
    ]
}

/// Lowercases `text` and keeps only ASCII word characters (letters, digits,
/// underscore), concatenated with no separators.
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|character| character.is_ascii_alphanumeric() || *character == '_')
        .map(|character| character.to_ascii_lowercase())
        .collect()
}

static DESCRIPTION_TO_ID: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut index = HashMap::with_capacity(OCCUPATIONS.len());
    for entry in OCCUPATIONS.entries() {
        index.insert(normalize(entry.description), entry.id);
    }
    tracing::debug!(entries = index.len(), "occupation description index built");
    index
});

static KEYWORD_TO_ID: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    for entry in OCCUPATIONS.entries() {
        let Some(keywords) = entry.meta_value("keywords") else {
            continue;
        };
        for token in keywords.split(',') {
            let normalized = normalize(token);
            if normalized.is_empty() {
                continue;
            }
            // Later entries overwrite earlier ones for the same token.
            index.insert(normalized, entry.id);
        }
    }
    tracing::debug!(tokens = index.len(), "occupation keyword index built");
    index
});

/// Resolves a free-text description to its occupation, modulo
/// normalization.
pub fn id_by_description(description: &str) -> Option<OccupationId> {
    let id = *DESCRIPTION_TO_ID.get(&normalize(description))?;
    Some(OccupationId::from_static(id))
}

/// Resolves a keyword token to its occupation, modulo normalization.
pub fn id_by_keyword(keyword: &str) -> Option<OccupationId> {
    let id = *KEYWORD_TO_ID.get(&normalize(keyword))?;
    Some(OccupationId::from_static(id))
}

impl OccupationId {
    /// The raw comma-separated keyword list for this entry, if any.
    pub fn keywords(&self) -> Option<&'static str> {
        self.entry().and_then(|entry| entry.meta_value("keywords"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_the_full_table() {
        assert_eq!(OCCUPATIONS.len(), 430);
    }

    #[test]
    fn cpa_resolves_to_the_accountant_entry() {
        let id = id_by_keyword("CPA").unwrap();
        assert_eq!(id, OccupationId::ACCOUNTANT);
    }

    #[test]
    fn every_description_resolves_to_its_own_entry() {
        for entry in OCCUPATIONS.entries() {
            let id = id_by_description(entry.description).unwrap();
            assert_eq!(id.as_str(), entry.id, "description {:?}", entry.description);
        }
    }

    #[test]
    fn every_keyword_token_resolves_modulo_last_writer_wins() {
        for entry in OCCUPATIONS.entries() {
            let Some(keywords) = entry.meta_value("keywords") else {
                continue;
            };
            for token in keywords.split(',') {
                let resolved = id_by_keyword(token).unwrap();
                let winner = *KEYWORD_TO_ID.get(&normalize(token)).unwrap();
                assert_eq!(resolved.as_str(), winner);
            }
        }
    }

    #[test]
    fn normalization_drops_separators_and_case() {
        assert_eq!(normalize("Real-Estate Agent!"), "realestateagent");
        assert_eq!(normalize("  "), "");
        assert!(id_by_keyword("").is_none());
        assert!(id_by_description("no such job").is_none());
    }
}
