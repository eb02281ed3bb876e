//! Compiled-in catalog table

use crate::{Category, ExtensionRecord};

pub(crate) static RECORDS: &[ExtensionRecord] = &[
    // === IMAGE ===
    ExtensionRecord {
        extension: ".png",
        display_name: "Portable Network Graphics",
        category: Category::Image,
        short_description: "Растровое изображение со сжатием без потерь и поддержкой прозрачности.",
        long_description: "PNG создан как свободная замена GIF. Использует алгоритм DEFLATE, хранит альфа-канал и до 48 бит цвета на пиксель. Стандартный формат для скриншотов, иконок и веб-графики с резкими краями.",
        platform_compatibility: &["Windows", "macOS", "Linux", "Android", "iOS", "Web"],
        associated_technologies: &["DEFLATE", "zlib", "libpng", "APNG"],
        strengths: &["Сжатие без потерь", "Прозрачность (альфа-канал)", "Открытый стандарт"],
        weaknesses: &["Большой размер для фотографий", "Нет поддержки CMYK"],
        popularity_score: 92,
    },
    ExtensionRecord {
        extension: ".jpg",
        display_name: "JPEG Image",
        category: Category::Image,
        short_description: "Самый распространённый формат фотографий со сжатием с потерями.",
        long_description: "JPEG использует дискретное косинусное преобразование и квантование, позволяя уменьшить фотографию в десятки раз ценой артефактов. Поддерживается буквально любым устройством с экраном.",
        platform_compatibility: &["Windows", "macOS", "Linux", "Android", "iOS", "Web"],
        associated_technologies: &["DCT", "EXIF", "libjpeg-turbo"],
        strengths: &["Малый размер файлов", "Универсальная поддержка", "Метаданные EXIF"],
        weaknesses: &["Сжатие с потерями", "Нет прозрачности", "Артефакты при пересохранении"],
        popularity_score: 98,
    },
    ExtensionRecord {
        extension: ".svg",
        display_name: "Scalable Vector Graphics",
        category: Category::Image,
        short_description: "Векторная графика на основе XML, масштабируется без потери качества.",
        long_description: "SVG описывает изображение фигурами, путями и текстом. Файл можно редактировать как текст, анимировать через CSS и встраивать прямо в HTML-страницу.",
        platform_compatibility: &["Web", "Windows", "macOS", "Linux"],
        associated_technologies: &["XML", "CSS", "DOM", "Inkscape"],
        strengths: &["Бесконечное масштабирование", "Текстовый формат", "Анимация и интерактивность"],
        weaknesses: &["Не подходит для фотографий", "Может содержать скрипты"],
        popularity_score: 78,
    },
    ExtensionRecord {
        extension: ".webp",
        display_name: "WebP Image",
        category: Category::Image,
        short_description: "Современный формат Google для веба, сжимает лучше JPEG и PNG.",
        long_description: "WebP основан на видеокодеке VP8 и поддерживает как сжатие с потерями, так и без, прозрачность и анимацию. Широко используется CDN для уменьшения веса страниц.",
        platform_compatibility: &["Web", "Android", "Windows", "macOS", "Linux"],
        associated_technologies: &["VP8", "RIFF", "libwebp"],
        strengths: &["Высокая степень сжатия", "Прозрачность и анимация"],
        weaknesses: &["Слабая поддержка в старых редакторах"],
        popularity_score: 70,
    },
    // === AUDIO ===
    ExtensionRecord {
        extension: ".mp3",
        display_name: "MPEG-1 Audio Layer III",
        category: Category::Audio,
        short_description: "Классический формат сжатого аудио с потерями.",
        long_description: "MP3 использует психоакустическую модель, отбрасывая звуки, которые человек почти не слышит. Формат сделал возможной цифровую музыку в интернете и до сих пор поддерживается везде.",
        platform_compatibility: &["Windows", "macOS", "Linux", "Android", "iOS", "Web"],
        associated_technologies: &["MPEG", "ID3", "LAME"],
        strengths: &["Универсальная совместимость", "Малый размер"],
        weaknesses: &["Сжатие с потерями", "Уступает AAC и Opus по качеству"],
        popularity_score: 95,
    },
    ExtensionRecord {
        extension: ".flac",
        display_name: "Free Lossless Audio Codec",
        category: Category::Audio,
        short_description: "Аудио без потерь качества, в среднем вдвое меньше WAV.",
        long_description: "FLAC сжимает PCM-звук без потерь: после декодирования получается побитово идентичный сигнал. Популярен у аудиофилов и для архивирования музыкальных коллекций.",
        platform_compatibility: &["Windows", "macOS", "Linux", "Android"],
        associated_technologies: &["PCM", "Vorbis comments", "libFLAC"],
        strengths: &["Без потерь", "Открытый и свободный", "Поддержка тегов"],
        weaknesses: &["Файлы крупнее MP3", "Ограниченная поддержка в iOS"],
        popularity_score: 60,
    },
    ExtensionRecord {
        extension: ".wav",
        display_name: "Waveform Audio File",
        category: Category::Audio,
        short_description: "Несжатый звук в контейнере RIFF от Microsoft и IBM.",
        long_description: "WAV обычно хранит несжатый PCM-поток. Используется в студийной записи и монтаже, где важна простота обработки и отсутствие задержек на декодирование.",
        platform_compatibility: &["Windows", "macOS", "Linux"],
        associated_technologies: &["RIFF", "PCM"],
        strengths: &["Максимальное качество", "Простота обработки"],
        weaknesses: &["Огромный размер", "Ограничение 4 ГБ"],
        popularity_score: 65,
    },
    // === VIDEO ===
    ExtensionRecord {
        extension: ".mp4",
        display_name: "MPEG-4 Part 14",
        category: Category::Video,
        short_description: "Стандартный контейнер для видео в интернете и на мобильных устройствах.",
        long_description: "MP4 основан на формате ISO Base Media и обычно содержит видео H.264 или H.265 и звук AAC. Поддерживает потоковую передачу, субтитры и главы.",
        platform_compatibility: &["Windows", "macOS", "Linux", "Android", "iOS", "Web"],
        associated_technologies: &["H.264", "H.265", "AAC", "ISO BMFF"],
        strengths: &["Повсеместная поддержка", "Хорошее сжатие", "Стриминг"],
        weaknesses: &["Патентованные кодеки"],
        popularity_score: 97,
    },
    ExtensionRecord {
        extension: ".mkv",
        display_name: "Matroska Video",
        category: Category::Video,
        short_description: "Открытый контейнер, вмещающий любое число дорожек и субтитров.",
        long_description: "Matroska построен на EBML и может хранить несколько видео-, аудиодорожек, субтитров и вложений в одном файле. Основа формата WebM.",
        platform_compatibility: &["Windows", "Linux", "macOS", "Android"],
        associated_technologies: &["EBML", "WebM", "VP9", "AV1"],
        strengths: &["Гибкость", "Множество дорожек", "Открытый стандарт"],
        weaknesses: &["Нет нативной поддержки в iOS", "Не все ТВ воспроизводят"],
        popularity_score: 75,
    },
    ExtensionRecord {
        extension: ".avi",
        display_name: "Audio Video Interleave",
        category: Category::Video,
        short_description: "Устаревший видеоконтейнер Microsoft времён Windows 3.1.",
        long_description: "AVI чередует блоки аудио и видео в контейнере RIFF. Не поддерживает современные возможности вроде B-кадров без хаков и переменной частоты кадров.",
        platform_compatibility: &["Windows", "Linux", "macOS"],
        associated_technologies: &["RIFF", "DivX", "Xvid"],
        strengths: &["Простота структуры", "Совместимость со старым ПО"],
        weaknesses: &["Устаревший", "Большие файлы", "Нет стриминга"],
        popularity_score: 35,
    },
    // === ARCHIVE ===
    ExtensionRecord {
        extension: ".zip",
        display_name: "ZIP Archive",
        category: Category::Archive,
        short_description: "Самый распространённый архив, встроен во все операционные системы.",
        long_description: "ZIP сжимает каждый файл отдельно (обычно DEFLATE) и хранит центральный каталог в конце архива. На нём основаны DOCX, JAR, APK и многие другие форматы.",
        platform_compatibility: &["Windows", "macOS", "Linux", "Android", "iOS"],
        associated_technologies: &["DEFLATE", "ZIP64", "AES"],
        strengths: &["Встроенная поддержка везде", "Доступ к отдельным файлам"],
        weaknesses: &["Слабое сжатие", "Устаревшее шифрование ZipCrypto"],
        popularity_score: 96,
    },
    ExtensionRecord {
        extension: ".rar",
        display_name: "Roshal Archive",
        category: Category::Archive,
        short_description: "Проприетарный архив с хорошим сжатием и записью восстановления.",
        long_description: "RAR разработан Евгением Рошалом. Поддерживает непрерывные архивы, многотомность и запись для восстановления повреждённых данных. Создание архивов требует WinRAR.",
        platform_compatibility: &["Windows", "macOS", "Linux", "Android"],
        associated_technologies: &["WinRAR", "unrar"],
        strengths: &["Высокое сжатие", "Восстановление повреждений", "Многотомные архивы"],
        weaknesses: &["Проприетарный", "Платный архиватор"],
        popularity_score: 72,
    },
    ExtensionRecord {
        extension: ".7z",
        display_name: "7-Zip Archive",
        category: Category::Archive,
        short_description: "Открытый формат с очень высокой степенью сжатия LZMA2.",
        long_description: "7z поддерживает LZMA, LZMA2, PPMd и BZip2, шифрование AES-256 с шифрованием имён файлов и непрерывное сжатие.",
        platform_compatibility: &["Windows", "Linux", "macOS"],
        associated_technologies: &["LZMA2", "AES-256", "p7zip"],
        strengths: &["Лучшее сжатие", "Надёжное шифрование", "Бесплатный"],
        weaknesses: &["Нужен сторонний архиватор", "Медленное сжатие"],
        popularity_score: 68,
    },
    // === DOCUMENT ===
    ExtensionRecord {
        extension: ".pdf",
        display_name: "Portable Document Format",
        category: Category::Document,
        short_description: "Документ, который выглядит одинаково на любом устройстве.",
        long_description: "PDF от Adobe фиксирует вёрстку страницы: шрифты, векторную графику и изображения. Стандартизирован как ISO 32000, поддерживает формы, подписи и архивный профиль PDF/A.",
        platform_compatibility: &["Windows", "macOS", "Linux", "Android", "iOS", "Web"],
        associated_technologies: &["PostScript", "ISO 32000", "PDF/A"],
        strengths: &["Точная вёрстка", "Цифровые подписи", "Архивное хранение"],
        weaknesses: &["Сложно редактировать", "Может содержать вредоносный код"],
        popularity_score: 97,
    },
    ExtensionRecord {
        extension: ".docx",
        display_name: "Word Open XML Document",
        category: Category::Document,
        short_description: "Текстовый документ Microsoft Word на основе Office Open XML.",
        long_description: "DOCX - это ZIP-архив с XML-файлами разметки, стилей и вложенными медиа. Формат стандартизирован как ECMA-376 и читается LibreOffice и Google Docs.",
        platform_compatibility: &["Windows", "macOS", "Web", "Android", "iOS"],
        associated_technologies: &["Office Open XML", "ZIP", "ECMA-376"],
        strengths: &["Богатое форматирование", "Рецензирование и правки"],
        weaknesses: &["Вёрстка отличается между редакторами"],
        popularity_score: 90,
    },
    ExtensionRecord {
        extension: ".txt",
        display_name: "Plain Text",
        category: Category::Document,
        short_description: "Простой текст без форматирования.",
        long_description: "Текстовый файл содержит только символы в какой-либо кодировке (сегодня почти всегда UTF-8). Открывается любым редактором на любой системе.",
        platform_compatibility: &["Windows", "macOS", "Linux", "Android", "iOS"],
        associated_technologies: &["UTF-8", "ASCII"],
        strengths: &["Максимальная совместимость", "Минимальный размер"],
        weaknesses: &["Нет форматирования", "Путаница с кодировками и переводами строк"],
        popularity_score: 88,
    },
    // === EXECUTABLE ===
    ExtensionRecord {
        extension: ".exe",
        display_name: "Windows Executable",
        category: Category::Executable,
        short_description: "Исполняемая программа Windows в формате Portable Executable.",
        long_description: "EXE содержит машинный код, таблицы импорта и ресурсы в формате PE/COFF. Запускается загрузчиком Windows; в Linux и macOS требует Wine или эмуляции.",
        platform_compatibility: &["Windows"],
        associated_technologies: &["PE/COFF", "Win32 API", "Wine"],
        strengths: &["Прямой запуск в Windows", "Самодостаточность"],
        weaknesses: &["Частый носитель вирусов", "Только Windows"],
        popularity_score: 94,
    },
    ExtensionRecord {
        extension: ".msi",
        display_name: "Windows Installer Package",
        category: Category::Executable,
        short_description: "Установочный пакет службы Windows Installer.",
        long_description: "MSI - это база данных установки в формате COM Structured Storage. Позволяет централизованно развертывать, восстанавливать и удалять программы через групповые политики.",
        platform_compatibility: &["Windows"],
        associated_technologies: &["Windows Installer", "WiX", "Group Policy"],
        strengths: &["Транзакционная установка", "Корпоративное развертывание"],
        weaknesses: &["Сложность создания", "Только Windows"],
        popularity_score: 55,
    },
    ExtensionRecord {
        extension: ".apk",
        display_name: "Android Package",
        category: Category::Executable,
        short_description: "Пакет приложения Android для установки на смартфон.",
        long_description: "APK - подписанный ZIP-архив с байткодом DEX, ресурсами и манифестом. Google Play всё чаще распространяет приложения как AAB, но устанавливаются они по-прежнему в виде APK.",
        platform_compatibility: &["Android", "ChromeOS"],
        associated_technologies: &["DEX", "ART", "ZIP", "APK Signature Scheme"],
        strengths: &["Установка вне магазина", "Подпись разработчика"],
        weaknesses: &["Риск вредоносных сборок", "Только Android"],
        popularity_score: 80,
    },
    // === SYSTEM ===
    ExtensionRecord {
        extension: ".dll",
        display_name: "Dynamic Link Library",
        category: Category::System,
        short_description: "Динамическая библиотека Windows, общая для нескольких программ.",
        long_description: "DLL имеет тот же формат PE, что и программы, но экспортирует функции для других модулей. Неправильные версии библиотек приводят к печально известному DLL hell.",
        platform_compatibility: &["Windows"],
        associated_technologies: &["PE/COFF", "COM", "Win32 API"],
        strengths: &["Повторное использование кода", "Экономия памяти"],
        weaknesses: &["Конфликты версий", "Подмена библиотек злоумышленниками"],
        popularity_score: 70,
    },
    ExtensionRecord {
        extension: ".sys",
        display_name: "Windows System File",
        category: Category::System,
        short_description: "Драйвер устройства или системный файл Windows.",
        long_description: "Файлы SYS загружаются в режиме ядра и управляют оборудованием. Ошибка в драйвере приводит к синему экрану, поэтому современные версии Windows требуют цифровой подписи.",
        platform_compatibility: &["Windows"],
        associated_technologies: &["WDM", "KMDF", "Kernel Mode"],
        strengths: &["Прямой доступ к оборудованию"],
        weaknesses: &["Ошибки роняют систему", "Нельзя редактировать"],
        popularity_score: 40,
    },
    ExtensionRecord {
        extension: ".iso",
        display_name: "ISO Disc Image",
        category: Category::System,
        short_description: "Образ оптического диска, точная копия файловой системы.",
        long_description: "ISO хранит содержимое CD, DVD или Blu-ray в файловой системе ISO 9660 или UDF. Используется для дистрибутивов операционных систем и виртуальных машин.",
        platform_compatibility: &["Windows", "macOS", "Linux"],
        associated_technologies: &["ISO 9660", "UDF", "El Torito"],
        strengths: &["Точная копия диска", "Монтируется без записи"],
        weaknesses: &["Большой размер", "Нет сжатия"],
        popularity_score: 62,
    },
    // === CODE ===
    ExtensionRecord {
        extension: ".rs",
        display_name: "Rust Source",
        category: Category::Code,
        short_description: "Исходный код на языке Rust.",
        long_description: "Файлы Rust компилируются rustc через LLVM в нативный код. Система владения гарантирует безопасность памяти без сборщика мусора.",
        platform_compatibility: &["Windows", "macOS", "Linux"],
        associated_technologies: &["Cargo", "rustc", "LLVM"],
        strengths: &["Безопасность памяти", "Высокая производительность"],
        weaknesses: &["Долгая компиляция", "Крутая кривая обучения"],
        popularity_score: 45,
    },
    ExtensionRecord {
        extension: ".py",
        display_name: "Python Script",
        category: Category::Code,
        short_description: "Скрипт на Python, исполняется интерпретатором.",
        long_description: "Python - интерпретируемый язык с динамической типизацией. Скрипты применяются в автоматизации, анализе данных и машинном обучении.",
        platform_compatibility: &["Windows", "macOS", "Linux"],
        associated_technologies: &["CPython", "pip", "PyPI"],
        strengths: &["Простой синтаксис", "Огромная экосистема"],
        weaknesses: &["Низкая скорость", "Зависимость от версии интерпретатора"],
        popularity_score: 85,
    },
    ExtensionRecord {
        extension: ".json",
        display_name: "JavaScript Object Notation",
        category: Category::Code,
        short_description: "Текстовый формат обмена данными, де-факто стандарт веб-API.",
        long_description: "JSON описывает объекты, массивы, строки, числа и логические значения. Легко читается людьми и разбирается любым языком программирования.",
        platform_compatibility: &["Windows", "macOS", "Linux", "Web"],
        associated_technologies: &["REST", "JavaScript", "JSON Schema"],
        strengths: &["Читаемость", "Поддержка во всех языках"],
        weaknesses: &["Нет комментариев", "Нет типа даты"],
        popularity_score: 90,
    },
    // === GAME ===
    ExtensionRecord {
        extension: ".vpk",
        display_name: "Valve Pak",
        category: Category::Game,
        short_description: "Архив ресурсов игр на движке Source: модели, текстуры, звуки.",
        long_description: "VPK упаковывает тысячи файлов игры в несколько крупных архивов с индексным файлом _dir. Используется в Counter-Strike, Dota 2, Left 4 Dead и Team Fortress 2. Открывается утилитами GCFScape и VRF.",
        platform_compatibility: &["Windows", "Linux", "macOS"],
        associated_technologies: &["Source Engine", "Source 2", "Steam", "GCFScape"],
        strengths: &["Быстрая загрузка ресурсов", "Удобные обновления через Steam"],
        weaknesses: &["Нужны специальные утилиты", "Только игры Valve"],
        popularity_score: 30,
    },
    ExtensionRecord {
        extension: ".bsp",
        display_name: "Binary Space Partition Map",
        category: Category::Game,
        short_description: "Скомпилированная карта уровня для Quake и Source.",
        long_description: "BSP хранит геометрию уровня, разбитую деревом двоичного разбиения пространства, вместе с освещением и видимостью. Создаётся компилятором карт из исходников Hammer.",
        platform_compatibility: &["Windows", "Linux", "macOS"],
        associated_technologies: &["Hammer Editor", "VBSP", "Quake Engine"],
        strengths: &["Быстрый рендер уровней"],
        weaknesses: &["Нельзя редактировать без декомпиляции"],
        popularity_score: 25,
    },
    ExtensionRecord {
        extension: ".vtf",
        display_name: "Valve Texture Format",
        category: Category::Game,
        short_description: "Текстура для движка Source с мип-уровнями.",
        long_description: "VTF хранит изображение в формате, готовом для видеокарты (DXT, BGRA), вместе с мип-картами и кадрами анимации. Материал описывается сопутствующим VMT.",
        platform_compatibility: &["Windows", "Linux"],
        associated_technologies: &["Source Engine", "VTFEdit", "DXT"],
        strengths: &["Готов к загрузке в GPU"],
        weaknesses: &["Нужен конвертер", "Только Source"],
        popularity_score: 20,
    },
];
